//! Portal state shared by every command.
//!
//! [`Portal`] owns the store handle, the signed-in session and the loaded
//! configuration. Commands are `impl Portal` blocks under `commands/`.

use chrono::{Local, NaiveDate};
use registrar_shared::{
    Certificate, Event, ExamResult, GalleryItem, InstituteSettings, QuizQuestion, TimetableSlot,
    User,
};
use registrar_store::Database;
use tracing::{debug, info, warn};

use crate::config::PortalConfig;
use crate::error::Result;
use crate::seed;
use crate::session::{Session, SessionSync};

pub struct Portal {
    db: Database,
    session: Session,
    config: PortalConfig,
}

/// Everything a page needs after a reload.
#[derive(Debug, Clone)]
pub struct PortalSnapshot {
    pub students: Vec<User>,
    pub certificates: Vec<Certificate>,
    pub results: Vec<ExamResult>,
    pub events: Vec<Event>,
    pub timetable: Vec<TimetableSlot>,
    pub gallery: Vec<GalleryItem>,
    pub quiz: Vec<QuizQuestion>,
    pub settings: InstituteSettings,
    pub session: SessionSync,
}

impl Portal {
    /// Open the database named by the config, or the platform default.
    pub fn open(config: PortalConfig) -> Result<Self> {
        let options = config.store_options();
        let db = match &config.db_path {
            Some(path) => Database::open_at(path, options)?,
            None => Database::new(options)?,
        };
        info!(path = ?db.path(), namespace = %config.namespace, "Portal store opened");
        Ok(Self::with_database(db, config))
    }

    pub fn open_in_memory(config: PortalConfig) -> Result<Self> {
        let db = Database::open_in_memory(config.store_options())?;
        Ok(Self::with_database(db, config))
    }

    fn with_database(db: Database, config: PortalConfig) -> Self {
        Self {
            db,
            session: Session::default(),
            config,
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current()
    }

    /// Pick up the snapshot a previous run left behind.
    pub fn restore_session(&mut self) -> Result<Option<&User>> {
        if let Some(user) = self.db.load_session()? {
            debug!(user_id = %user.id, "Restored session snapshot");
            self.session.begin(user);
        }
        Ok(self.session.current())
    }

    /// Re-read every collection, seeding an empty store first when enabled,
    /// and bring the session up to date.
    pub fn refresh_all(&mut self) -> Result<PortalSnapshot> {
        if self.config.seed_demo {
            self.seed_empty_slots()?;
        }

        let users = self.db.get_users()?;
        let session = self.resync_session(&users)?;

        let settings = match self.db.get_settings()? {
            Some(settings) => settings,
            None => seed::default_settings(),
        };

        Ok(PortalSnapshot {
            students: users.into_iter().filter(User::is_student).collect(),
            certificates: self.db.get_certificates()?,
            results: self.db.get_results()?,
            events: self.db.get_events()?,
            timetable: self.db.get_timetable()?,
            gallery: self.db.get_gallery()?,
            quiz: self.db.get_quiz()?,
            settings,
            session,
        })
    }

    fn seed_empty_slots(&self) -> Result<()> {
        if self.db.get_users()?.is_empty() {
            info!("Seeding demo users");
            self.db.save_users(&seed::demo_users())?;
        }
        if self.db.get_events()?.is_empty() {
            self.db.save_events(&seed::demo_events())?;
        }
        if self.db.get_timetable()?.is_empty() {
            self.db.save_timetable(&seed::demo_timetable())?;
        }
        if self.db.get_settings()?.is_none() {
            self.db.save_settings(&seed::default_settings())?;
        }
        Ok(())
    }

    /// Persist the user collection and refresh the session against it.
    pub(crate) fn commit_users(&mut self, users: &[User]) -> Result<()> {
        self.db.save_users(users)?;
        self.resync_session(users)?;
        Ok(())
    }

    fn resync_session(&mut self, users: &[User]) -> Result<SessionSync> {
        let outcome = self.session.resync(users);
        match (outcome, self.session.current()) {
            (SessionSync::Refreshed, Some(user)) => self.db.save_session(user)?,
            (SessionSync::Cleared, _) => {
                warn!("Signed-in user no longer exists; session ended");
                self.db.clear_session()?;
            }
            _ => {}
        }
        Ok(outcome)
    }

    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub(crate) fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}
