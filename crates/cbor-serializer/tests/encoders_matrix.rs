use cbor_serializer::{
    BigIntEncoder, CborError, CborSerializer, DateNumberEncoder, DateStringEncoder, Value,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn sample_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 2, 2, 11, 4, 5).unwrap() + Duration::milliseconds(6)
}

fn serialize_hex(serializer: &CborSerializer, value: &Value) -> String {
    hex::encode(serializer.serialize(value).unwrap())
}

#[test]
fn bigint_tags() {
    let mut serializer = CborSerializer::with_default_encoders();
    assert_eq!(
        serializer.serialize(&Value::BigInt(1 << 64)),
        Err(CborError::NoEncoderFound)
    );
    serializer.add_encoder(BigIntEncoder::new());

    let cases: [(i128, &str); 5] = [
        (1 << 64, "c249010000000000000000"),
        (0, "c24100"),
        (255, "c241ff"),
        (-256, "c341ff"),
        (-(1 << 64) - 1, "c349010000000000000000"),
    ];
    for (n, expected) in cases {
        assert_eq!(serialize_hex(&serializer, &Value::BigInt(n)), expected, "bigint {n}");
    }

    // Plain integers stay with the structural encoder.
    assert_eq!(serialize_hex(&serializer, &Value::from(255u64)), "18ff");
    let nested = Value::Array(vec![Value::BigInt(1 << 64)]);
    assert_eq!(serialize_hex(&serializer, &nested), "81c249010000000000000000");
}

#[test]
fn date_string() {
    let mut serializer = CborSerializer::with_default_encoders();
    serializer.add_encoder(DateStringEncoder::new());
    assert_eq!(
        serialize_hex(&serializer, &Value::custom(sample_date())),
        "c07818323030302d30322d30325431313a30343a30352e3030365a"
    );
}

#[test]
fn date_number() {
    let mut serializer = CborSerializer::with_default_encoders();
    serializer.add_encoder(DateNumberEncoder::new());
    assert_eq!(
        serialize_hex(&serializer, &Value::custom(sample_date())),
        "c11a38980f25"
    );
    let epoch = Utc.timestamp_opt(0, 0).unwrap();
    assert_eq!(serialize_hex(&serializer, &Value::custom(epoch)), "c100");
    let before_epoch = Utc.timestamp_opt(-90, 0).unwrap();
    assert_eq!(serialize_hex(&serializer, &Value::custom(before_epoch)), "c13859");
}

#[test]
fn date_encoders_share_a_name() {
    let mut serializer = CborSerializer::with_default_encoders();
    serializer
        .add_encoder(DateStringEncoder::new())
        .add_encoder(DateNumberEncoder::new());
    // Equal priority: the first registered wins.
    assert!(serialize_hex(&serializer, &Value::custom(sample_date())).starts_with("c0"));

    assert_eq!(serializer.remove_encoder("date"), 2);
    assert_eq!(
        serializer.serialize(&Value::custom(sample_date())),
        Err(CborError::NoEncoderFound)
    );
}
