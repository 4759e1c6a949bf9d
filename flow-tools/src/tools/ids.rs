use uuid::Uuid;

pub const ID_LENGTH: usize = 8;

/// Short identifier taken from the front of a random v4 UUID.
pub fn generate_unique_id() -> String {
    let mut id = Uuid::new_v4().to_string();
    id.truncate(ID_LENGTH);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_eight_hex_digits() {
        let id = generate_unique_id();
        assert_eq!(id.len(), ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn ids_differ_between_calls() {
        assert_ne!(generate_unique_id(), generate_unique_id());
    }
}
