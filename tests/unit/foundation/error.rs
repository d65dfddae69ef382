use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ConicError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ConicError::invalid_color("x")
            .to_string()
            .contains("invalid color:")
    );
    assert!(
        ConicError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn stop_errors_carry_their_details() {
    let err = ConicError::InvalidStopCount { count: 1 };
    assert!(err.to_string().contains("got 1"));

    let err = ConicError::ChannelOutOfRange {
        stop: 2,
        value: 1.5,
    };
    let msg = err.to_string();
    assert!(msg.contains("stop 2"));
    assert!(msg.contains("1.5"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ConicError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
