//! Upstream entity models.
//!
//! All entities are owned by the upstream service; the dashboard only
//! deserializes what it renders.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::prelude::DateTime;

/// Summary row returned by the template listing endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateHeader {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub vendor: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime>,

    #[serde(default)]
    pub updated_at: Option<DateTime>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub template_header: TemplateHeader,

    /// Schema the passes instantiated from this template start out with.
    #[serde(default)]
    pub fields_model: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pass {
    pub id: i64,

    #[serde(default)]
    pub template_id: Option<i64>,

    /// Public install link served by the upstream vendor.
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub fields: Map<String, Value>,

    #[serde(default)]
    pub created_at: Option<DateTime>,

    #[serde(default)]
    pub updated_at: Option<DateTime>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TemplateList {
    pub template_headers: Vec<TemplateHeader>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PassList {
    pub passes: Vec<Pass>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_template_list_ok() -> crate::prelude::Result {
        let list = serde_json::from_str::<TemplateList>(
            // language=JSON
            r#"{"count": 1, "templateHeaders": [{"id": 7, "name": "Coupon", "vendor": "Apple Passbook", "createdAt": "2012-07-01T18:28:54Z"}]}"#,
        )?;
        assert_eq!(list.template_headers.len(), 1);
        let header = &list.template_headers[0];
        assert_eq!(header.id, 7);
        assert_eq!(header.name, "Coupon");
        assert_eq!(header.description, "");
        assert!(header.created_at.is_some());
        Ok(())
    }

    #[test]
    fn parse_pass_ok() -> crate::prelude::Result {
        let pass = serde_json::from_str::<Pass>(
            // language=JSON
            r#"{"id": 42, "templateId": 7, "url": "https://wallet.example.com/p/42", "fields": {"offer": {"value": "20% off"}}}"#,
        )?;
        assert_eq!(pass.id, 42);
        assert_eq!(pass.template_id, Some(7));
        assert!(pass.fields.contains_key("offer"));
        assert_eq!(pass.created_at, None);
        Ok(())
    }
}
