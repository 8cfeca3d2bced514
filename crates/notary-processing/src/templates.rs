//! Plaintext document templates
//!
//! Fixed templates for the two supported document kinds. Fields are
//! substituted verbatim: no escaping, no validation, no length limits.

use notary_core::models::DocumentKind;
use uuid::Uuid;

/// Render the template for `kind`, substituting the free-text fields.
///
/// The property address is only used by the sale deed; the will template
/// ignores it.
pub fn render_document(
    kind: DocumentKind,
    doc_id: Uuid,
    owner_name: &str,
    property_address: &str,
) -> String {
    match kind {
        DocumentKind::SaleDeed => format!(
            "SALE DEED\n\n\
             Document ID: {doc_id}\n\
             Owner: {owner_name}\n\
             Property Address: {property_address}\n\n\
             This is a prototype document."
        ),
        DocumentKind::Will => format!(
            "LAST WILL AND TESTAMENT\n\n\
             Document ID: {doc_id}\n\
             Testator: {owner_name}\n\n\
             This is a prototype document."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_deed_contains_fields() {
        let id = Uuid::new_v4();
        let content = render_document(DocumentKind::SaleDeed, id, "Jane Doe", "123 Main St");

        assert!(content.starts_with("SALE DEED\n"));
        assert!(content.contains(&format!("Document ID: {}", id)));
        assert!(content.contains("Owner: Jane Doe"));
        assert!(content.contains("Property Address: 123 Main St"));
        assert!(content.ends_with("This is a prototype document."));
    }

    #[test]
    fn test_will_contains_testator_and_ignores_address() {
        let id = Uuid::new_v4();
        let content = render_document(DocumentKind::Will, id, "Jane Doe", "123 Main St");

        assert!(content.starts_with("LAST WILL AND TESTAMENT\n"));
        assert!(content.contains("Testator: Jane Doe"));
        assert!(!content.contains("123 Main St"));
    }

    #[test]
    fn test_fields_are_substituted_verbatim() {
        let id = Uuid::new_v4();
        let content = render_document(
            DocumentKind::SaleDeed,
            id,
            "O'Brien & Sons <tag>",
            "5, Rue d'État",
        );

        assert!(content.contains("Owner: O'Brien & Sons <tag>"));
        assert!(content.contains("Property Address: 5, Rue d'État"));
    }
}
