//! Gates and failure modes of the decoder.

use serde_json::{Value, json};
use ssynth_codec::{Codec, CodecError, CodecOptions, SchemaError};
use ssynth_model::{
    AnonymizationTransformer, ConstructError, Constraints, LIBRARY_VERSION, LookupError,
    MinMaxTransformer,
};

fn codec_at(version: &str) -> Codec<'static> {
    Codec::with_options(CodecOptions::new().with_library_version(version))
}

fn envelope(constraints: Value) -> Value {
    json!({
        "module": "smartnoise-synth",
        "version": "1.0.4",
        "constraints": constraints,
    })
}

fn id_column() -> Constraints {
    Constraints::from([(
        "id".to_string(),
        AnonymizationTransformer::new("email").into(),
    )])
}

#[test]
fn newer_payload_is_rejected_by_older_library() {
    let wire = codec_at("1.0.5").encode(&id_column()).unwrap();
    let err = codec_at("1.0.4").decode(&wire).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Schema(SchemaError::VersionMismatch { ref expected, ref found })
            if expected == "1.0.4" && found == "'1.0.5'"
    ));
    assert_eq!(
        err.to_string(),
        "version mismatch: expected '1.0.4', found '1.0.5'"
    );
}

#[test]
fn default_codec_requires_its_own_version() {
    let wire = codec_at("0.0.0-other").encode(&id_column()).unwrap();
    let err = Codec::new().decode(&wire).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Schema(SchemaError::VersionMismatch { ref expected, .. })
            if expected == LIBRARY_VERSION
    ));
}

#[test]
fn version_must_be_a_string() {
    let mut payload = envelope(json!({}));
    payload["version"] = json!(1.04);
    let err = codec_at("1.0.4").decode_value(payload).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Schema(SchemaError::VersionMismatch { ref found, .. }) if found == "1.04"
    ));
}

#[test]
fn foreign_module_is_rejected() {
    let mut payload = envelope(json!({}));
    payload["module"] = json!("diffprivlib");
    let err = codec_at("1.0.4").decode_value(payload).unwrap_err();
    assert_eq!(
        err.to_string(),
        "module mismatch: expected 'smartnoise-synth', found 'diffprivlib'"
    );
}

#[test]
fn codec_for_another_module_rejects_default_payload() {
    let wire = codec_at("1.0.4").encode(&id_column()).unwrap();
    let other = Codec::with_options(
        CodecOptions::new()
            .with_library_version("1.0.4")
            .with_module("synth-forks"),
    );
    let err = other.decode(&wire).unwrap_err();
    assert_eq!(
        err.to_string(),
        "module mismatch: expected 'synth-forks', found 'smartnoise-synth'"
    );

    let own = other.encode_to_value(&id_column()).unwrap();
    assert_eq!(own["module"], json!("synth-forks"));
    assert_eq!(other.decode_value(own).unwrap(), id_column());
}

#[test]
fn module_is_checked_before_version() {
    let payload = json!({"module": "other", "version": "9.9.9", "constraints": {}});
    let err = codec_at("1.0.4").decode_value(payload).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Schema(SchemaError::ModuleMismatch { .. })
    ));
}

#[test]
fn missing_envelope_keys() {
    let cases = [
        (json!({"version": "1.0.4", "constraints": {}}), "module"),
        (json!({"module": "smartnoise-synth", "constraints": {}}), "version"),
        (json!({"module": "smartnoise-synth", "version": "1.0.4"}), "constraints"),
    ];
    for (payload, missing) in cases {
        let err = codec_at("1.0.4").decode_value(payload).unwrap_err();
        match err {
            CodecError::Schema(SchemaError::MissingKey { key }) => assert_eq!(key, missing),
            other => panic!("expected missing '{missing}', got {other:?}"),
        }
    }
}

#[test]
fn extra_envelope_keys_are_ignored() {
    let mut payload = envelope(json!({}));
    payload["comment"] = json!("written by hand");
    let decoded = codec_at("1.0.4").decode_value(payload).unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn payload_must_be_an_object() {
    let err = codec_at("1.0.4").decode("[1, 2, 3]").unwrap_err();
    assert!(matches!(
        err,
        CodecError::Schema(SchemaError::NotAnObject { found: "array" })
    ));

    let mut payload = envelope(json!({}));
    payload["constraints"] = json!(["id"]);
    let err = codec_at("1.0.4").decode_value(payload).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Schema(SchemaError::ConstraintsNotObject { found: "array" })
    ));
}

#[test]
fn invalid_json_is_reported() {
    let err = codec_at("1.0.4").decode("{\"module\": ").unwrap_err();
    assert!(matches!(err, CodecError::Json(_)));
}

#[test]
fn unknown_kind_fails_resolution() {
    let payload = envelope(json!({
        "age": {"type": "_ssynth_type:QuantileTransformer", "params": {}}
    }));
    let err = codec_at("1.0.4").decode_value(payload).unwrap_err();
    match err {
        CodecError::Resolution { reference, source } => {
            assert_eq!(reference, "_ssynth_type:QuantileTransformer");
            assert_eq!(
                source,
                LookupError::UnknownKind("QuantileTransformer".to_string())
            );
        }
        other => panic!("expected a resolution error, got {other:?}"),
    }
}

#[test]
fn unknown_instance_fails_resolution() {
    let payload = envelope(json!({
        "age": {
            "type": "_ssynth_type:MinMaxTransformer",
            "params": {"odometer": "_ssynth_instance:Ledger"}
        }
    }));
    let err = codec_at("1.0.4").decode_value(payload).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Resolution { source: LookupError::UnknownInstance(ref name), .. }
            if name == "Ledger"
    ));
}

#[test]
fn resolution_runs_before_envelope_checks() {
    let payload = json!({
        "module": "smartnoise-synth",
        "version": "0.0.1",
        "constraints": {"age": {"type": "_ssynth_type:Nope", "params": {}}}
    });
    let err = codec_at("1.0.4").decode_value(payload).unwrap_err();
    assert!(matches!(err, CodecError::Resolution { .. }));
}

#[test]
fn rejected_argument_names_column_and_kind() {
    let payload = envelope(json!({
        "age": {"type": "_ssynth_type:BinTransformer", "params": {"colour": "red"}}
    }));
    let err = codec_at("1.0.4").decode_value(payload).unwrap_err();
    match err {
        CodecError::Construction {
            column,
            kind,
            source,
        } => {
            assert_eq!(column, "age");
            assert_eq!(kind, "BinTransformer");
            assert_eq!(
                source,
                ConstructError::UnexpectedArgument {
                    kind: "BinTransformer".to_string(),
                    name: "colour".to_string(),
                }
            );
        }
        other => panic!("expected a construction error, got {other:?}"),
    }
}

#[test]
fn wrong_argument_type_inside_chain() {
    let payload = envelope(json!({
        "income": {
            "type": "_ssynth_type:ChainTransformer",
            "params": [
                {"type": "_ssynth_type:LogTransformer", "params": {}},
                {"type": "_ssynth_type:BinTransformer", "params": {"bins": "twenty"}}
            ]
        }
    }));
    let err = codec_at("1.0.4").decode_value(payload).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Construction { ref column, ref kind, source: ConstructError::WrongType { .. } }
            if column == "income" && kind == "BinTransformer"
    ));
}

#[test]
fn positional_fake_must_be_text() {
    let payload = envelope(json!({
        "id": {"type": "_ssynth_type:AnonymizationTransformer", "params": 42}
    }));
    let err = codec_at("1.0.4").decode_value(payload).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Construction { source: ConstructError::WrongType { .. }, .. }
    ));
}

#[test]
fn malformed_descriptors() {
    let cases = [
        json!({"age": "_ssynth_type:MinMaxTransformer"}),
        json!({"age": {"params": {}}}),
        json!({"age": {"type": "MinMaxTransformer", "params": {}}}),
        json!({"age": {"type": "_ssynth_type:MinMaxTransformer"}}),
        json!({"age": {"type": "_ssynth_type:MinMaxTransformer", "params": {}, "fitted": true}}),
    ];
    for constraints in cases {
        let err = codec_at("1.0.4")
            .decode_value(envelope(constraints.clone()))
            .unwrap_err();
        assert!(
            matches!(
                err,
                CodecError::Schema(SchemaError::MalformedDescriptor { ref column, .. })
                    if column == "age"
            ),
            "{constraints} gave {err:?}"
        );
    }
}

#[test]
fn non_finite_parameters_cannot_be_encoded() {
    let constraints = Constraints::from([(
        "age".to_string(),
        MinMaxTransformer::new().with_bounds(0, f64::INFINITY).into(),
    )]);
    let err = codec_at("1.0.4").encode(&constraints).unwrap_err();
    assert!(matches!(
        err,
        CodecError::NonFinite { ref column, ref parameter }
            if column == "age" && parameter == "upper"
    ));
}

#[test]
fn bare_constraints_must_be_a_mapping() {
    let codec = codec_at("1.0.4");
    for (document, found) in [("[]", "array"), ("\"email\"", "string"), ("null", "null")] {
        let err = codec.read_constraints(document).unwrap_err();
        assert!(
            matches!(err, CodecError::InputType { found: f } if f == found),
            "{document} gave {err:?}"
        );
    }
}
