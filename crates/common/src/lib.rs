pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pong_serializes_message() {
        let v = serde_json::to_value(types::Pong::default()).unwrap();
        assert_eq!(v, serde_json::json!({"message": "pong"}));
    }
}
