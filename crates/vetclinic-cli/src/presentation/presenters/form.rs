use crate::app::forms::FormKind;
use crate::args::hints::{cmd, shell};
use crate::presentation::view_models::{FormFieldViewModel, FormViewModel};

/// Where the form will be submitted from, which decides the hint line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitFrom {
    #[default]
    CommandLine,
    Shell,
}

fn submit_command(kind: FormKind, from: SubmitFrom) -> &'static str {
    match (from, kind) {
        (SubmitFrom::CommandLine, FormKind::AddPet) => cmd::PETS_ADD,
        (SubmitFrom::CommandLine, FormKind::AddOwner) => cmd::OWNERS_ADD,
        (SubmitFrom::CommandLine, FormKind::AddRecord) => cmd::RECORDS_ADD,
        (SubmitFrom::Shell, FormKind::AddPet) => shell::ADD_PET,
        (SubmitFrom::Shell, FormKind::AddOwner) => shell::ADD_OWNER,
        (SubmitFrom::Shell, FormKind::AddRecord) => shell::ADD_RECORD,
    }
}

pub fn present_form(kind: FormKind, from: SubmitFrom) -> FormViewModel {
    let specs = kind.fields();

    let mut submit = submit_command(kind, from).to_string();
    for spec in specs.iter().filter(|s| s.required) {
        submit.push_str(&format!(" {}=<{}>", spec.name, spec.label));
    }

    FormViewModel {
        title: kind.section().title().to_string(),
        fields: specs
            .iter()
            .map(|spec| FormFieldViewModel {
                name: spec.name,
                label: spec.label,
                required: spec.required,
                choices: spec.choices.map(|c| c.as_str()),
            })
            .collect(),
        submit,
    }
}
