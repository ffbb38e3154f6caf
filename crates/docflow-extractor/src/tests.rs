//! Scenario tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::ExtractorDispatcher;
    use docflow_domain::{Category, FieldValue};

    const INVOICE: &str =
        "Invoice No: INV-2024-001\nVendor: ABC Corp\nTotal: $1,500.00\nDue Date: 2024-12-31";

    #[test]
    fn test_invoice_document() {
        let fields = ExtractorDispatcher::builtin().extract(&Category::Invoice, INVOICE);

        assert_eq!(fields.get("invoice_no"), Some(&FieldValue::from("INV-2024-001")));
        assert_eq!(fields.get("vendor"), Some(&FieldValue::from("ABC Corp")));
        assert_eq!(fields.get("amount"), Some(&FieldValue::Number(1500.0)));
        assert_eq!(fields.get("currency"), Some(&FieldValue::from("USD")));
        assert_eq!(fields.get("due_date"), Some(&FieldValue::from("2024-12-31")));

        // Declared but not located
        assert!(fields.contains_field("tax_amount"));
        assert!(fields.get("tax_amount").is_none());
        assert!(fields.get("date").is_none());
    }

    #[test]
    fn test_invoice_json_keeps_null_fields() {
        let fields = ExtractorDispatcher::builtin().extract(&Category::Invoice, INVOICE);
        let json = serde_json::to_value(&fields).unwrap();

        assert_eq!(json["invoice_no"], "INV-2024-001");
        assert_eq!(json["amount"], 1500.0);
        assert!(json["tax_amount"].is_null());
        assert_eq!(json.as_object().map(|o| o.len()), Some(7));
    }

    #[test]
    fn test_resume_document() {
        let text = "Skilled in Python, Go, and SQL with 5 years of experience";
        let fields = ExtractorDispatcher::builtin().extract(&Category::Resume, text);

        let skills = fields.get("skills").and_then(FieldValue::as_list).unwrap();
        assert_eq!(skills, ["Python", "Go", "SQL"]);
        assert_eq!(
            fields.get("experience_years").and_then(FieldValue::as_integer),
            Some(5)
        );
    }

    #[test]
    fn test_legal_document() {
        let text = "IN THE SUPERIOR COURT\nCase Number: CV-88-213\n\
                    Order dated 14 February 2022 under Section 7";
        let fields = ExtractorDispatcher::builtin().extract(&Category::Legal, text);

        assert_eq!(fields.get("case_number"), Some(&FieldValue::from("CV-88-213")));
        assert_eq!(fields.get("effective_date"), Some(&FieldValue::from("2022-02-14")));
        assert_eq!(fields.get("section_count"), Some(&FieldValue::Integer(1)));
        assert_eq!(fields.get("has_sections"), Some(&FieldValue::Bool(true)));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let dispatcher = ExtractorDispatcher::builtin();
        for category in [Category::Invoice, Category::Resume, Category::Legal] {
            assert_eq!(
                dispatcher.extract(&category, INVOICE),
                dispatcher.extract(&category, INVOICE)
            );
        }
    }

    #[test]
    fn test_wrong_category_degrades_to_absent() {
        let fields = ExtractorDispatcher::builtin().extract(&Category::Resume, "Total: 12");
        assert_eq!(fields.len(), 7);
        assert!(fields.get("email").is_none());
        assert!(fields.get("skills").is_none());
    }
}

#[cfg(test)]
mod proptests {
    use crate::{invoice, legal, resume, ExtractorDispatcher};
    use docflow_domain::{Category, ExtractionStrategy};
    use proptest::prelude::*;

    const STRATEGIES: &[(&str, ExtractionStrategy)] = &[
        ("invoice_no", invoice::invoice_no),
        ("vendor", invoice::vendor),
        ("amount", invoice::amount),
        ("due_date", invoice::due_date),
        ("date", invoice::date),
        ("tax_amount", invoice::tax_amount),
        ("currency", invoice::currency),
        ("name", resume::name),
        ("email", resume::email),
        ("phone", resume::phone),
        ("skills", resume::skills),
        ("experience_years", resume::experience_years),
        ("education", resume::education),
        ("current_role", resume::current_role),
        ("has_sections", legal::has_sections),
        ("has_dates", legal::has_dates),
        ("section_count", legal::section_count),
        ("case_number", legal::case_number),
        ("effective_date", legal::effective_date),
    ];

    /// Label-heavy lines that drive every strategy past its first regex
    fn labelled_text() -> impl Strategy<Value = String> {
        let line = prop_oneof![
            "[ -~]{0,30}",
            "(Total|Tax|Due Date|Date|Invoice No|Vendor|Effective|Case No|Section) ?[:#]? ?[ -~]{0,20}",
            "[0-9]{1,4}[-/. ][0-9]{1,2}[-/. ][0-9]{1,4}",
            "[0-9.]{1,4}\\+? ?(years?|yrs) (of )?experience[ -~]{0,10}",
            "§ ?[0-9]{0,3}",
        ];
        proptest::collection::vec(line, 0..12).prop_map(|lines| lines.join("\n"))
    }

    fn categories() -> impl Strategy<Value = Category> {
        prop_oneof![
            Just(Category::Invoice),
            Just(Category::Resume),
            Just(Category::Legal),
            Just(Category::Unknown),
            "[a-z_]{1,12}".prop_map(|s| Category::parse(&s)),
        ]
    }

    proptest! {
        /// Property: arbitrary text never breaks extraction and every declared
        /// field is present
        #[test]
        fn test_arbitrary_text_is_tolerated(category in categories(), text in ".{0,400}") {
            let dispatcher = ExtractorDispatcher::builtin();
            let fields = dispatcher.extract(&category, &text);
            prop_assert_eq!(fields.len(), dispatcher.registry().schema(&category).len());
        }

        /// Property: lossily decoded binary input is handled like any text
        #[test]
        fn test_binary_garbage_is_tolerated(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let text = String::from_utf8_lossy(&bytes);
            let dispatcher = ExtractorDispatcher::builtin();
            for category in [Category::Invoice, Category::Resume, Category::Legal] {
                let fields = dispatcher.extract(&category, &text);
                prop_assert!(!fields.is_empty());
            }
        }

        /// Property: document-shaped noise around labels stays deterministic
        #[test]
        fn test_labelled_noise_is_deterministic(
            prefix in "[ -~]{0,40}",
            amount in "[0-9.,$]{0,12}",
        ) {
            let text = format!("{prefix}\nTotal: {amount}\nDue: {amount}");
            let dispatcher = ExtractorDispatcher::builtin();
            prop_assert_eq!(
                dispatcher.extract(&Category::Invoice, &text),
                dispatcher.extract(&Category::Invoice, &text)
            );
        }

        /// Property: strategies called directly never panic on arbitrary input
        #[test]
        fn test_strategies_never_panic(text in ".{0,300}") {
            for (_, strategy) in STRATEGIES {
                let _ = strategy(&text);
            }
        }

        /// Property: strategies called directly never panic on label-heavy text
        #[test]
        fn test_strategies_never_panic_on_labels(text in labelled_text()) {
            for (name, strategy) in STRATEGIES {
                let first = strategy(&text);
                prop_assert_eq!(&first, &strategy(&text), "{} is not deterministic", name);
            }
        }
    }
}
