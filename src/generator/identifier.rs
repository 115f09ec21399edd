use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

/// Text form of generated step identifiers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdFormat {
    /// `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`
    #[default]
    Hyphenated,
    /// The same UUID with the separators stripped (32 hex characters).
    Simple,
}

/// Builds a random (version 4) UUID from bytes drawn out of `rng`.
fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}

pub fn generate_identifier<R: Rng + ?Sized>(rng: &mut R, format: IdFormat) -> String {
    let uuid = random_uuid(rng);
    match format {
        IdFormat::Hyphenated => uuid.hyphenated().to_string(),
        IdFormat::Simple => uuid.simple().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_identifier_formats() {
        let mut rng = StdRng::seed_from_u64(1);
        let hyphenated = generate_identifier(&mut rng, IdFormat::Hyphenated);
        let simple = generate_identifier(&mut rng, IdFormat::Simple);

        assert_eq!(hyphenated.len(), 36);
        assert_eq!(hyphenated.matches('-').count(), 4);
        assert_eq!(simple.len(), 32);
        assert!(simple.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_identifier_is_version_four() {
        let mut rng = StdRng::seed_from_u64(2);
        let id = generate_identifier(&mut rng, IdFormat::Hyphenated);
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_same_seed_same_identifier() {
        let a = generate_identifier(&mut StdRng::seed_from_u64(9), IdFormat::Simple);
        let b = generate_identifier(&mut StdRng::seed_from_u64(9), IdFormat::Simple);
        assert_eq!(a, b);
    }
}
