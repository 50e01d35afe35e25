//! Templates command report data structures.

use super::output::{Output, Report};

/// One template as printed by `typegen templates`.
#[derive(Debug)]
pub struct TemplateEntry {
    pub name: &'static str,
    pub file_name: &'static str,
    pub fields: &'static [&'static str],
    pub text: String,
}

#[derive(Debug)]
pub struct TemplatesReport {
    pub templates: Vec<TemplateEntry>,
}

impl Report for TemplatesReport {
    fn render(&self, out: &mut dyn Output) {
        for entry in &self.templates {
            out.divider(&format!("{} ({})", entry.name, entry.file_name));
            if !entry.fields.is_empty() {
                out.key_value("fields", &entry.fields.join(", "));
                out.newline();
            }
            out.preformatted(&entry.text);
        }
    }
}
