//! Encode/decode round trips over the built-in catalogue.

use serde_json::{Value, json};
use ssynth_codec::{Codec, CodecOptions};
use ssynth_model::{
    AnonymizationTransformer, BinTransformer, ChainTransformer, ClampTransformer, Constraints,
    DateTimeTransformer, DropTransformer, Instance, LabelTransformer, LogTransformer,
    MinMaxTransformer, Numeric, OneHotEncoder, Odometer, StandardScaler, Transform, Transformer,
};

fn codec() -> Codec<'static> {
    Codec::with_options(CodecOptions::new().with_library_version("1.0.4"))
}

fn single(column: &str, transformer: impl Into<Transformer>) -> Constraints {
    Constraints::from([(column.to_string(), transformer.into())])
}

fn full_pipeline() -> Constraints {
    Constraints::from([
        (
            "id".to_string(),
            AnonymizationTransformer::new("email").into(),
        ),
        (
            "income".to_string(),
            ChainTransformer::new([
                Transformer::from(LogTransformer),
                BinTransformer::new().with_bins(20).with_bounds(0, 50).into(),
            ])
            .into(),
        ),
        (
            "height".to_string(),
            ChainTransformer::new([
                Transformer::from(StandardScaler::new().with_bounds(0, 1)),
                BinTransformer::new().with_bins(20).with_bounds(0, 1).into(),
            ])
            .into(),
        ),
        (
            "weight".to_string(),
            ChainTransformer::new([
                Transformer::from(ClampTransformer::new().with_lower(10).with_upper(200)),
                BinTransformer::new().with_bins(20).into(),
            ])
            .into(),
        ),
        (
            "age".to_string(),
            MinMaxTransformer::new().with_bounds(0, 100).into(),
        ),
        (
            "sex".to_string(),
            ChainTransformer::new([
                Transformer::from(LabelTransformer::new(true)),
                OneHotEncoder.into(),
            ])
            .into(),
        ),
        ("rank".to_string(), LabelTransformer::new(false).into()),
        ("job".to_string(), DropTransformer.into()),
        (
            "date".to_string(),
            ChainTransformer::new([
                Transformer::from(DateTimeTransformer::new("2000-01-01")),
                MinMaxTransformer::new().with_nullable(false).into(),
            ])
            .into(),
        ),
    ])
}

#[test]
fn anonymization_wire_text() {
    let wire = codec()
        .encode(&single("id", AnonymizationTransformer::new("email")))
        .unwrap();
    insta::assert_snapshot!(
        wire,
        @r#"{"module":"smartnoise-synth","version":"1.0.4","constraints":{"id":{"type":"_ssynth_type:AnonymizationTransformer","params":"email"}}}"#
    );
}

#[test]
fn anonymization_round_trip() {
    let codec = codec();
    let wire = codec
        .encode(&single("id", AnonymizationTransformer::new("email")))
        .unwrap();

    let envelope: Value = serde_json::from_str(&wire).unwrap();
    let kind = envelope["constraints"]["id"]["type"].as_str().unwrap();
    assert!(kind.ends_with("AnonymizationTransformer"));
    assert_eq!(envelope["constraints"]["id"]["params"], json!("email"));

    let decoded = codec.decode(&wire).unwrap();
    let Some(Transformer::Anonymization(anon)) = decoded.get("id") else {
        panic!("expected an AnonymizationTransformer for 'id'");
    };
    assert_eq!(anon.fake(), "email");
}

#[test]
fn chain_wire_text_keeps_parameter_order() {
    let chain = ChainTransformer::new([
        Transformer::from(LogTransformer),
        BinTransformer::new().with_bins(20).with_bounds(0, 50).into(),
    ]);
    let wire = codec().encode(&single("income", chain)).unwrap();
    insta::assert_snapshot!(
        wire,
        @r#"{"module":"smartnoise-synth","version":"1.0.4","constraints":{"income":{"type":"_ssynth_type:ChainTransformer","params":[{"type":"_ssynth_type:LogTransformer","params":{}},{"type":"_ssynth_type:BinTransformer","params":{"lower":0,"upper":50,"epsilon":0.0,"bins":20,"nullable":false,"odometer":null}}]}}}"#
    );
}

#[test]
fn every_builtin_kind_round_trips() {
    let codec = codec();
    let constraints = full_pipeline();
    let wire = codec.encode(&constraints).unwrap();
    let decoded = codec.decode(&wire).unwrap();
    assert_eq!(decoded, constraints);
}

#[test]
fn columns_keep_insertion_order() {
    const ORDER: [&str; 9] = [
        "id", "income", "height", "weight", "age", "sex", "rank", "job", "date",
    ];
    let codec = codec();
    let envelope = codec.encode_to_value(&full_pipeline()).unwrap();
    let written: Vec<&str> = envelope["constraints"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(written, ORDER);

    let decoded = codec.decode_value(envelope).unwrap();
    let read: Vec<&str> = decoded.keys().map(String::as_str).collect();
    assert_eq!(read, ORDER);
}

#[test]
fn minmax_integer_bounds_stay_exact() {
    let codec = codec();
    let wire = codec
        .encode(&single("age", MinMaxTransformer::new().with_bounds(0, 100)))
        .unwrap();
    let decoded = codec.decode(&wire).unwrap();
    let Some(Transformer::MinMax(minmax)) = decoded.get("age") else {
        panic!("expected a MinMaxTransformer for 'age'");
    };
    assert_eq!(minmax.lower(), Some(Numeric::Int(0)));
    assert_eq!(minmax.upper(), Some(Numeric::Int(100)));
    assert_eq!(minmax.epsilon(), Numeric::Float(0.0));
}

#[test]
fn float_parameters_stay_floats() {
    let codec = codec();
    let scaler = StandardScaler::new().with_bounds(-0.5, 2.25).with_epsilon(1.0);
    let decoded = codec
        .decode(&codec.encode(&single("height", scaler.clone())).unwrap())
        .unwrap();
    assert_eq!(decoded.get("height"), Some(&Transformer::from(scaler)));
}

#[test]
fn chain_order_is_preserved() {
    let codec = codec();
    let chain = ChainTransformer::new([
        Transformer::from(ClampTransformer::new().with_lower(1)),
        LogTransformer.into(),
        BinTransformer::new().into(),
    ]);
    let decoded = codec
        .decode(&codec.encode(&single("income", chain)).unwrap())
        .unwrap();

    let Some(Transformer::Chain(chain)) = decoded.get("income") else {
        panic!("expected a ChainTransformer for 'income'");
    };
    let kinds: Vec<&str> = chain.transformers().iter().map(|t| t.kind_name()).collect();
    assert_eq!(
        kinds,
        ["ClampTransformer", "LogTransformer", "BinTransformer"]
    );
}

#[test]
fn fitted_state_does_not_reach_the_wire() {
    let codec = codec();
    let mut minmax = MinMaxTransformer::new().with_bounds(0, 100);
    minmax.fit(&[3.0, 42.0, 97.5]);
    let mut label = LabelTransformer::new(false);
    label.fit(&["a", "b"]);
    let constraints = Constraints::from([
        ("age".to_string(), minmax.into()),
        ("rank".to_string(), label.into()),
    ]);

    let envelope = codec.encode_to_value(&constraints).unwrap();
    let age_params = envelope["constraints"]["age"]["params"].as_object().unwrap();
    let names: Vec<&str> = age_params.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        ["lower", "upper", "epsilon", "negative", "nullable", "odometer"]
    );
    assert_eq!(
        envelope["constraints"]["rank"]["params"],
        json!({"nullable": false})
    );

    let decoded = codec.decode_value(envelope).unwrap();
    assert!(decoded.values().all(|t| !t.fit_complete()));
}

#[test]
fn odometer_travels_as_instance_reference() {
    let codec = codec();
    let mut odometer = Odometer::new();
    odometer.spend(0.5);
    let bin = BinTransformer::new().with_bins(4).with_odometer(odometer);

    let envelope = codec.encode_to_value(&single("score", bin)).unwrap();
    assert_eq!(
        envelope["constraints"]["score"]["params"]["odometer"],
        json!("_ssynth_instance:Odometer")
    );

    let decoded = codec.decode_value(envelope).unwrap();
    let Some(Transformer::Bin(bin)) = decoded.get("score") else {
        panic!("expected a BinTransformer for 'score'");
    };
    // Rebuilt with no arguments, so the spent budget starts over.
    assert_eq!(bin.odometer(), Some(&Instance::Odometer(Odometer::new())));
}

#[test]
fn scaler_odometer_survives_decode() {
    let codec = codec();
    let scaler = StandardScaler::new()
        .with_bounds(0, 1)
        .with_odometer(Odometer::new());
    let decoded = codec
        .decode(&codec.encode(&single("height", scaler)).unwrap())
        .unwrap();
    let Some(Transformer::StandardScaler(scaler)) = decoded.get("height") else {
        panic!("expected a StandardScaler for 'height'");
    };
    assert_eq!(scaler.odometer(), Some(&Instance::Odometer(Odometer::new())));
    assert_eq!(scaler.lower(), Some(Numeric::Int(0)));
}

#[test]
fn anonymization_count_does_not_reach_the_wire() {
    let codec = codec();
    let mut anonymization = AnonymizationTransformer::new("email");
    anonymization.record_generated(25);
    assert_eq!(anonymization.generated(), 25);

    let envelope = codec.encode_to_value(&single("id", anonymization)).unwrap();
    assert_eq!(envelope["constraints"]["id"]["params"], json!("email"));

    let decoded = codec.decode_value(envelope).unwrap();
    let Some(Transformer::Anonymization(anonymization)) = decoded.get("id") else {
        panic!("expected an AnonymizationTransformer for 'id'");
    };
    assert_eq!(anonymization.generated(), 0);
}

#[test]
fn anonymization_accepts_named_fake() {
    let payload = json!({
        "module": "smartnoise-synth",
        "version": "1.0.4",
        "constraints": {
            "id": {"type": "_ssynth_type:AnonymizationTransformer", "params": {"fake": "name"}}
        }
    });
    let decoded = codec().decode_value(payload).unwrap();
    assert_eq!(
        decoded.get("id"),
        Some(&AnonymizationTransformer::new("name").into())
    );
}

#[test]
fn pretty_output_decodes_the_same() {
    let pretty = Codec::with_options(
        CodecOptions::new()
            .with_library_version("1.0.4")
            .with_pretty(true),
    );
    let constraints = full_pipeline();
    let wire = pretty.encode(&constraints).unwrap();
    assert!(wire.contains('\n'));
    assert_eq!(codec().decode(&wire).unwrap(), constraints);
}

#[test]
fn bare_constraints_document() {
    let document = r#"{
        "age": {"type": "_ssynth_type:MinMaxTransformer", "params": {"lower": 0, "upper": 100}},
        "job": {"type": "_ssynth_type:DropTransformer", "params": {}}
    }"#;
    let constraints = codec().read_constraints(document).unwrap();
    assert_eq!(constraints.len(), 2);
    assert_eq!(
        constraints.get("age"),
        Some(&MinMaxTransformer::new().with_bounds(0, 100).into())
    );
}

#[test]
fn codec_is_shared_across_threads() {
    let codec = codec();
    let constraints = full_pipeline();
    let expected = codec.encode(&constraints).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| codec.encode(&constraints).unwrap()))
            .collect();
        for handle in handles {
            let wire = handle.join().unwrap();
            assert_eq!(wire, expected);
            assert_eq!(codec.decode(&wire).unwrap(), constraints);
        }
    });
}
