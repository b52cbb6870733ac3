//! Domain model (field identifiers, form state, descriptors, task records, errors).

pub mod descriptor;
pub mod errors;
pub mod field;
pub mod form;
pub mod task;

pub use self::descriptor::{FieldDescriptor, FieldEntry, FieldSet};
pub use self::errors::{ProviderError, ValidationError};
pub use self::field::{BASE_FIELDS, CSH_KEY, EMAIL_FIELDS, FieldKey, LABEL_PREFIX};
pub use self::form::{FormAction, FormContext, SubmittedData, TaskInfo};
pub use self::task::{BaseSettings, EmailTask, JobsTask};
