use clap::Args;
use vetclinic_types::{FieldPair, FormFields};

#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    #[arg(value_name = "FIELD=VALUE", help = "Form fields, one name=value pair each")]
    pub fields: Vec<FieldPair>,
}

impl FieldArgs {
    pub fn resolve(&self) -> FormFields {
        self.fields
            .iter()
            .map(|pair| (pair.name.clone(), pair.value.clone()))
            .collect()
    }
}
