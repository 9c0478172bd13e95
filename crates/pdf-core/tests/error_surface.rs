use pdf_core::errors::{ErrorInfo, PdfError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("x", 0.25)
        .with_context("reason", "example")
}

#[test]
fn model_not_set_error_surface() {
    let err = PdfError::model_not_set(0.5, 100.0);
    assert_eq!(err.info().code, "model-not-set");
    assert_eq!(err.info().context.get("q2").map(String::as_str), Some("100"));
    assert!(err.to_string().starts_with("model not set: "));
}

#[test]
fn kinematics_error_surface() {
    let err = PdfError::Kinematics(sample_info("x-out-of-range", "x above 1"));
    assert_eq!(err.info().code, "x-out-of-range");
    assert_eq!(err.info().context.get("x").map(String::as_str), Some("0.25"));
}

#[test]
fn model_error_surface() {
    let err = PdfError::Model(sample_info("M001", "grid exhausted"));
    assert_eq!(err.info().code, "M001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn config_error_surface() {
    let err = PdfError::Config(sample_info("C001", "inverted limits"));
    assert_eq!(err.info().code, "C001");
}

#[test]
fn display_lists_context_and_hint() {
    let err = PdfError::Model(sample_info("M002", "bad node").with_hint("widen the grid"));
    assert_eq!(
        err.to_string(),
        "model error: bad node [M002] (reason=example, x=0.25); hint: widen the grid"
    );
}

#[test]
fn display_without_context_or_hint_is_bare() {
    let err = PdfError::Config(ErrorInfo::new("C002", "empty window"));
    assert_eq!(err.to_string(), "config error: empty window [C002]");
}

#[test]
fn kinematics_context_records_both_inputs() {
    let info = ErrorInfo::new("K001", "outside grid").with_kinematics(1e-3, 2.5);
    assert_eq!(info.context.get("x").map(String::as_str), Some("0.001"));
    assert_eq!(info.context.get("q2").map(String::as_str), Some("2.5"));
    assert_eq!(info.context.len(), 2);
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = PdfError::Kinematics(ErrorInfo::new("q2-too-low", "below threshold"));
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["family"], "Kinematics");
    assert_eq!(json["detail"]["code"], "q2-too-low");
    assert!(json["detail"].get("hint").is_none());

    let decoded: PdfError = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, err);
}
