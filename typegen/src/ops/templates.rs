//! Templates operation - listing template text.

use typegen_templates::{TemplateName, TemplateService};

use crate::reports::{TemplateEntry, TemplatesReport};

/// Collect the raw text of `name`, or of every template when `None`.
pub fn templates(service: &TemplateService, name: Option<TemplateName>) -> TemplatesReport {
    let names = match name {
        Some(name) => vec![name],
        None => TemplateName::ALL.to_vec(),
    };

    let templates = names
        .into_iter()
        .map(|name| TemplateEntry {
            name: name.as_str(),
            file_name: name.file_name(),
            fields: name.fields(),
            text: service.template(name).to_string(),
        })
        .collect();

    TemplatesReport { templates }
}
