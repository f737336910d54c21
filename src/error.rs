// Copyright (C) 2020-2026 Andy Kurnia.

pub enum MyError {
    DictionaryNotFound(String),
    Message(String),
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MyError::DictionaryNotFound(path) => write!(f, "{} not found", path),
            MyError::Message(s) => write!(f, "{}", s),
        }
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError::Message(s)
}

pub fn dictionary_not_found(path: &str) -> MyError {
    MyError::DictionaryNotFound(path.to_owned())
}

// true if the error (possibly boxed) is a missing dictionary.
pub fn is_dictionary_not_found(err: &BoxAnyError) -> bool {
    matches!(
        err.downcast_ref::<MyError>(),
        Some(MyError::DictionaryNotFound(_))
    )
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}
