pub mod cmd {
    // Config commands
    pub const CONFIG_INIT: &str = "vetclinic config init";
    pub const CONFIG_SHOW: &str = "vetclinic config show";

    // Record commands
    pub const PETS_LIST: &str = "vetclinic pets list";
    pub const PETS_ADD: &str = "vetclinic pets add";
    pub const OWNERS_ADD: &str = "vetclinic owners add";
    pub const RECORDS_ADD: &str = "vetclinic records add";

    // Overrides
    pub const API_BASE_FLAG: &str = "vetclinic --api-base <URL> status";
}

/// Shell spellings of the same actions.
pub mod shell {
    pub const ADD_PET: &str = "add-pet";
    pub const ADD_OWNER: &str = "add-owner";
    pub const ADD_RECORD: &str = "add-record";
}
