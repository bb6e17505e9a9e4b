pub type FavsquareResult<T> = Result<T, FavsquareError>;

#[derive(thiserror::Error, Debug)]
pub enum FavsquareError {
    #[error("geometry error: {0}")]
    Geometry(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FavsquareError {
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefix_is_stable() {
        assert!(
            FavsquareError::geometry("x")
                .to_string()
                .contains("geometry error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = FavsquareError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
