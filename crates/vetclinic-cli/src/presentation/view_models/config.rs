use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub base_url: String,
    pub timeout_secs: u64,
    pub locale: String,
    pub chart_width: u16,
    pub chart_height: u16,
}
