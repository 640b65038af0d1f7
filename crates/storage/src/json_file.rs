use std::{
    collections::VecDeque,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::NaiveDate;
use gymlog_app::log;
use gymlog_domain as domain;
use ::log::{debug, warn};

/// Stores all workouts in a single JSON document.
///
/// Every write replaces the whole document. Appends and deletes are
/// serialized within the process.
pub struct JsonFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records of the document in stored order.
    ///
    /// A missing or empty file holds no records. A document that cannot be
    /// read or parsed is an error, so that writes never replace it.
    fn load(&self) -> Result<Vec<Record>, domain::StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Ok(vec![]);
        }

        let (Document::Current { workouts } | Document::Legacy(workouts)) =
            serde_json::from_str::<Document>(&content).map_err(|err| {
                domain::StorageError::Serialization(format!(
                    "corrupt workout data in {}: {err}",
                    self.path.display()
                ))
            })?;

        Ok(workouts
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Record::new(index, raw))
            .collect())
    }

    fn save(&self, records: &[Record]) -> Result<(), domain::StorageError> {
        let content = serde_json::to_string_pretty(&CurrentDocument {
            workouts: records.iter().map(|record| &record.raw).collect(),
        })
        .map_err(|err| domain::StorageError::Serialization(err.to_string()))?;
        write_atomically(&self.path, &content)?;
        debug!("wrote {} workouts to {}", records.len(), self.path.display());
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>, domain::StorageError> {
        self.write_lock
            .lock()
            .map_err(|err| domain::StorageError::Other(err.to_string().into()))
    }
}

impl domain::WorkoutRepository for JsonFile {
    fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        match self.load() {
            Ok(records) => Ok(records
                .into_iter()
                .filter_map(|record| record.workout)
                .collect()),
            Err(err) => {
                warn!("ignoring unreadable workout data: {err}");
                Ok(vec![])
            }
        }
    }

    fn create_workout(
        &self,
        workout: domain::NewWorkout,
    ) -> Result<domain::Workout, domain::CreateError> {
        let _guard = self.lock()?;
        let mut records = self.load()?;
        if let Some(id) = workout.id {
            if records.iter().any(|record| record.id() == Some(id)) {
                return Err(domain::CreateError::Conflict);
            }
        }
        let workout = workout.into_workout(domain::WorkoutID::new_random());
        let raw = serde_json::to_value(Workout::from(&workout))
            .map_err(|err| domain::StorageError::Serialization(err.to_string()))?;
        records.push(Record {
            raw,
            workout: Some(workout.clone()),
        });
        self.save(&records)?;
        Ok(workout)
    }

    fn delete_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutID, domain::DeleteError> {
        let _guard = self.lock()?;
        let mut records = self.load()?;
        let len = records.len();
        records.retain(|record| record.id() != Some(id));
        if records.len() != len {
            self.save(&records)?;
        }
        Ok(id)
    }
}

/// A stored workout together with its domain representation.
///
/// The raw value is written back as read. `workout` is `None` if the record
/// cannot be represented in the domain.
struct Record {
    raw: serde_json::Value,
    workout: Option<domain::Workout>,
}

impl Record {
    fn new(index: usize, raw: serde_json::Value) -> Self {
        let workout = match serde_json::from_value::<Workout>(raw.clone())
            .map_err(|err| err.to_string())
            .and_then(|w| domain::Workout::try_from(w).map_err(|err| err.to_string()))
        {
            Ok(workout) => Some(workout),
            Err(err) => {
                warn!("hiding unreadable workout record {index}: {err}");
                None
            }
        };
        Self { raw, workout }
    }

    fn id(&self) -> Option<domain::WorkoutID> {
        self.raw
            .get("id")
            .and_then(serde_json::Value::as_str)
            .and_then(|id| domain::WorkoutID::try_from(id).ok())
    }
}

/// Keeps the most recent log entries in a JSON file.
pub struct JsonFileLog {
    path: PathBuf,
}

impl JsonFileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl log::Repository for JsonFileLog {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|err| log::Error::Unknown(err.to_string()))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(VecDeque::new()),
            Err(err) => Err(log::Error::Unknown(err.to_string())),
        }
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        let content =
            serde_json::to_string(&entries).map_err(|err| log::Error::Unknown(err.to_string()))?;
        write_atomically(&self.path, &content).map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

fn write_atomically(path: &Path, content: &str) -> Result<(), domain::StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    fs::write(&tmp_path, content)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Document {
    Current { workouts: Vec<serde_json::Value> },
    Legacy(Vec<serde_json::Value>),
}

#[derive(serde::Serialize)]
struct CurrentDocument<'a> {
    workouts: Vec<&'a serde_json::Value>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: value.id.to_string(),
            date: value.date,
            name: value.name.as_ref().map(ToString::to_string),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = WorkoutError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: domain::WorkoutID::try_from(value.id.as_str())?,
            date: value.date,
            name: value.name.and_then(|name| domain::Name::new(&name).ok()),
            exercises: value
                .exercises
                .into_iter()
                .filter_map(|exercise| match domain::Exercise::try_from(exercise) {
                    Ok(exercise) => Some(exercise),
                    Err(err) => {
                        warn!("skipping exercise of workout {}: {err}", value.id);
                        None
                    }
                })
                .collect(),
            notes: value
                .notes
                .map(|notes| notes.trim().to_string())
                .filter(|notes| !notes.is_empty()),
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum WorkoutError {
    #[error("invalid id: {0}")]
    InvalidID(#[from] uuid::Error),
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidWeight(#[from] domain::WeightError),
    #[error(transparent)]
    InvalidReps(#[from] domain::RepsError),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub sets: Vec<Set>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            name: value.name.to_string(),
            sets: value.sets.iter().map(Set::from).collect(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = WorkoutError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::new(&value.name)?,
            sets: value
                .sets
                .into_iter()
                .filter_map(|set| match domain::Set::try_from(set) {
                    Ok(set) => Some(set),
                    Err(err) => {
                        warn!("skipping set of {}: {err}", value.name.trim());
                        None
                    }
                })
                .collect(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_number: Option<i64>,
    pub weight: f32,
    pub reps: i64,
}

impl From<&domain::Set> for Set {
    fn from(value: &domain::Set) -> Self {
        Self {
            set_number: value.set_number.map(|n| i64::from(u32::from(n))),
            weight: value.weight.into(),
            reps: i64::from(u32::from(value.reps)),
        }
    }
}

impl TryFrom<Set> for domain::Set {
    type Error = WorkoutError;

    fn try_from(value: Set) -> Result<Self, Self::Error> {
        Ok(Self {
            set_number: value
                .set_number
                .and_then(|n| u32::try_from(n).ok())
                .and_then(|n| domain::SetNumber::new(n).ok()),
            weight: domain::Weight::new(value.weight)?,
            reps: domain::Reps::new(
                u32::try_from(value.reps).map_err(|_| domain::RepsError::OutOfRange)?,
            )?,
        })
    }
}
