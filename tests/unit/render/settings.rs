use super::*;

#[test]
fn defaults_are_256_at_2x() {
    let s = RenderSettings::default();
    assert_eq!((s.width, s.height, s.supersample), (256, 256, 2));
    assert_eq!(s.internal_size().unwrap(), (512, 512));
    s.validate().unwrap();
}

#[test]
fn json_missing_fields_take_defaults() {
    let s = RenderSettings::from_json(r#"{ "width": 64 }"#).unwrap();
    assert_eq!(
        s,
        RenderSettings {
            width: 64,
            ..RenderSettings::default()
        }
    );
}

#[test]
fn json_roundtrip() {
    let s = RenderSettings {
        width: 100,
        height: 50,
        supersample: 4,
    };
    assert_eq!(RenderSettings::from_json(&s.to_json().unwrap()).unwrap(), s);
}

#[test]
fn json_errors_are_serde_errors() {
    let err = RenderSettings::from_json("{ not json").unwrap_err();
    assert!(matches!(err, IconError::Serde(_)));
    let err = RenderSettings::from_json(r#"{ "colour": "red" }"#).unwrap_err();
    assert!(matches!(err, IconError::Serde(_)));
}

#[test]
fn invalid_settings_are_rejected() {
    for s in [
        RenderSettings {
            width: 0,
            ..RenderSettings::default()
        },
        RenderSettings {
            supersample: 0,
            ..RenderSettings::default()
        },
        RenderSettings {
            supersample: MAX_SUPERSAMPLE + 1,
            ..RenderSettings::default()
        },
        RenderSettings {
            width: MAX_INTERNAL_SIDE,
            height: 1,
            supersample: 2,
        },
    ] {
        let err = s.validate().unwrap_err();
        assert!(matches!(err, IconError::Validation(_)), "{s:?}");
    }
    let err = RenderSettings::from_json(r#"{ "height": 0 }"#).unwrap_err();
    assert!(matches!(err, IconError::Validation(_)));
}

#[test]
fn zero_threads_is_rejected() {
    assert!(RenderThreading::default().validate().is_ok());
    let t = RenderThreading {
        parallel: true,
        threads: Some(0),
    };
    assert!(matches!(t.validate(), Err(IconError::Validation(_))));
}
