pub mod samples;

pub use samples::{
    annotate_document,
    AnnotatedDocument,
    OperationFailure,
    HTTP_REQUEST_METHODS,
    SAMPLES_FIELD,
};
