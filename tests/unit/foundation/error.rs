use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        IconError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(IconError::encode("x").to_string().contains("encode error:"));
    assert!(
        IconError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk full");
    let err = IconError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk full"));
}
