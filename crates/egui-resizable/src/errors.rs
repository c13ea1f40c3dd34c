#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PanelError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl PanelError {
    pub(crate) fn check(width: f32, max_width: f32) -> Result<(), PanelError> {
        if !width.is_finite() || width < 0.0 {
            return Err(PanelError::InvalidConfiguration(format!(
                "width must be finite and non-negative, got {width}"
            )));
        }
        if !max_width.is_finite() {
            return Err(PanelError::InvalidConfiguration(format!(
                "max width must be finite, got {max_width}"
            )));
        }
        if max_width < width {
            return Err(PanelError::InvalidConfiguration(format!(
                "max width {max_width} is below width {width}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PanelError;

    #[test]
    fn accepts_width_up_to_max() {
        assert_eq!(PanelError::check(150.0, 300.0), Ok(()));
        assert_eq!(PanelError::check(300.0, 300.0), Ok(()));
        assert_eq!(PanelError::check(0.0, 0.0), Ok(()));
    }

    #[test]
    fn rejects_max_below_width() {
        let err = PanelError::check(150.0, 100.0).unwrap_err();
        assert!(matches!(err, PanelError::InvalidConfiguration(_)));
        assert_eq!(
            err.to_string(),
            "invalid configuration: max width 100 is below width 150"
        );
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(PanelError::check(-1.0, 300.0).is_err());
        assert!(PanelError::check(f32::NAN, 300.0).is_err());
        assert!(PanelError::check(150.0, f32::INFINITY).is_err());
    }
}
