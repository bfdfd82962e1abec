use autofill_detection::{
    classifier::{
        classifier::{classify, has_credential_pair, identity_field, save_type_for},
        classifier_model::{Classification, ParsedStructure, UnusableReason},
        save_type::SaveTypeMask,
    },
    collector::{collector::collect_autofill_ids, field_map::FieldMap},
    parse_structure,
    structure::structure_model::{AssistNode, AutofillId},
    trace::{
        sink::{MemorySink, NullSink},
        trace::TraceKind,
    },
    traverse_structure,
};

use crate::common::builders::{field, screen, text_field};

mod common;

fn ids(entries: &[(&str, u32)]) -> FieldMap<AutofillId> {
    let mut fields = FieldMap::new();
    for (hint, id) in entries {
        fields.insert_first(hint, AutofillId(*id));
    }
    fields
}

// =========================================================================
// Scenarios
// =========================================================================

#[test]
fn email_and_password_form_is_usable() {
    let structure = screen(vec![field("password", 1), field("emailAddress", 2)]);

    let result = parse_structure(&structure, &NullSink);

    assert_eq!(
        result,
        Classification::Usable(ParsedStructure {
            identity_field_id: AutofillId(2),
            password_field_id: AutofillId(1),
            save_type: SaveTypeMask::GENERIC
                | SaveTypeMask::EMAIL_ADDRESS
                | SaveTypeMask::PASSWORD,
        })
    );
}

#[test]
fn username_is_identity_when_email_absent() {
    let structure = screen(vec![field("username", 3), field("password", 4)]);

    let parsed = parse_structure(&structure, &NullSink)
        .into_parsed()
        .expect("username + password is a credential pair");

    assert_eq!(parsed.identity_field_id, AutofillId(3));
    assert_eq!(parsed.password_field_id, AutofillId(4));
    assert_eq!(
        parsed.save_type,
        SaveTypeMask::USERNAME | SaveTypeMask::PASSWORD
    );
}

#[test]
fn password_alone_is_unusable() {
    let structure = screen(vec![field("password", 1)]);

    let result = parse_structure(&structure, &NullSink);

    assert_eq!(result, Classification::Unusable(UnusableReason::MissingIdentity));
    assert!(!result.is_usable());
}

#[test]
fn duplicate_username_keeps_first_field() {
    let structure = screen(vec![
        field("username", 101),
        field("username", 102),
        field("password", 200),
    ]);

    let fields = collect_autofill_ids(&structure, &NullSink);
    assert_eq!(fields.get("username"), Some(&AutofillId(101)));

    let parsed = classify(&fields, &NullSink).into_parsed().unwrap();
    assert_eq!(parsed.identity_field_id, AutofillId(101));
}

#[test]
fn save_mode_keeps_values_for_a_credential_pair() {
    let structure = screen(vec![
        text_field("emailAddress", 1, "alice@x.com"),
        text_field("password", 2, "secret"),
    ]);

    let fields = traverse_structure(&structure, &NullSink).expect("credential pair present");

    assert_eq!(fields.get("emailaddress").map(String::as_str), Some("alice@x.com"));
    assert_eq!(fields.get("password").map(String::as_str), Some("secret"));
    assert_eq!(fields.len(), 2);
}

#[test]
fn save_mode_drops_screens_without_a_credential_pair() {
    let structure = screen(vec![text_field("username", 1, "bob")]);
    let sink = MemorySink::new();

    assert_eq!(traverse_structure(&structure, &sink), None);
    assert_eq!(sink.events_of(TraceKind::Declined).len(), 1);
}

// =========================================================================
// Validation gate
// =========================================================================

#[test]
fn unhinted_structure_is_unusable() {
    let structure = screen(vec![AssistNode::new().with_id(1)]);

    assert_eq!(
        parse_structure(&structure, &NullSink),
        Classification::Unusable(UnusableReason::EmptyFieldSet)
    );
}

#[test]
fn missing_password_is_unusable_whatever_else_is_present() {
    let cases = [
        ids(&[("username", 1)]),
        ids(&[("emailaddress", 1)]),
        ids(&[("emailaddress", 1), ("username", 2)]),
        ids(&[("emailaddress", 1), ("username", 2), ("phone", 3)]),
    ];

    for fields in &cases {
        assert_eq!(
            classify(fields, &NullSink).unusable_reason(),
            Some(UnusableReason::MissingPassword),
            "fields: {:?}",
            fields
        );
        assert!(!has_credential_pair(fields));
    }
}

#[test]
fn unrelated_hints_do_not_count_as_identity() {
    let fields = ids(&[("phone", 1), ("password", 2)]);

    assert_eq!(
        classify(&fields, &NullSink).unusable_reason(),
        Some(UnusableReason::MissingIdentity)
    );
}

#[test]
fn email_takes_precedence_over_username() {
    let fields = ids(&[("username", 1), ("password", 2), ("emailaddress", 3)]);

    assert_eq!(identity_field(&fields), Some(&AutofillId(3)));

    let parsed = classify(&fields, &NullSink).into_parsed().unwrap();
    assert_eq!(parsed.identity_field_id, AutofillId(3));
    assert_eq!(parsed.password_field_id, AutofillId(2));
}

#[test]
fn decline_is_reported_to_sink() {
    let sink = MemorySink::new();

    classify(&ids(&[("password", 1)]), &sink);

    let declined = sink.events_of(TraceKind::Declined);
    assert_eq!(declined.len(), 1);
    assert_eq!(declined[0].detail.as_deref(), Some("no email or username field"));
    assert!(sink.events_of(TraceKind::Classified).is_empty());
}

// =========================================================================
// Save type mask
// =========================================================================

#[test]
fn each_hint_maps_to_its_like_named_flag() {
    assert_eq!(
        save_type_for(&ids(&[("emailaddress", 1)])),
        SaveTypeMask::EMAIL_ADDRESS
    );
    assert_eq!(save_type_for(&ids(&[("username", 1)])), SaveTypeMask::USERNAME);
    assert_eq!(save_type_for(&ids(&[("password", 1)])), SaveTypeMask::PASSWORD);
}

#[test]
fn mask_combines_all_credential_hints_and_ignores_others() {
    let fields = ids(&[("emailaddress", 1), ("username", 2), ("password", 3), ("phone", 4)]);

    let mask = save_type_for(&fields);

    assert_eq!(mask.bits(), 0x10 | 0x08 | 0x01);
    assert!(!mask.contains(SaveTypeMask::ADDRESS));
    assert_eq!(mask.to_string(), "PASSWORD|USERNAME|EMAIL_ADDRESS");
}

#[test]
fn mask_without_credential_hints_is_generic() {
    let mask = save_type_for(&ids(&[("phone", 1)]));

    assert!(mask.is_generic());
    assert_eq!(mask, SaveTypeMask::default());
    assert_eq!(mask.to_string(), "GENERIC");
}
