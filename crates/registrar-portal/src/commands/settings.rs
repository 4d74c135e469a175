use registrar_shared::InstituteSettings;
use tracing::info;

use crate::error::Result;
use crate::seed;
use crate::state::Portal;

impl Portal {
    /// Stored settings, or the built-in defaults when none were saved.
    pub fn institute_settings(&self) -> Result<InstituteSettings> {
        Ok(self
            .database()
            .get_settings()?
            .unwrap_or_else(seed::default_settings))
    }

    pub fn save_settings(&self, settings: &InstituteSettings) -> Result<()> {
        self.database().save_settings(settings)?;
        info!("Institute settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::empty_portal;

    #[test]
    fn test_defaults_until_saved() {
        let portal = empty_portal();
        assert_eq!(
            portal.institute_settings().unwrap(),
            seed::default_settings()
        );

        let mut settings = seed::default_settings();
        settings.phone = "+92 822 000000".into();
        settings.logo_url = Some("data:image/png;base64,AAAA".into());
        portal.save_settings(&settings).unwrap();

        assert_eq!(portal.institute_settings().unwrap(), settings);
    }
}
