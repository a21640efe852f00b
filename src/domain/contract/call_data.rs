//! `@`-delimited call data: function selector followed by positional arguments

use std::fmt;

use crate::shared::errors::RequestError;

pub const SEPARATOR: char = '@';

/// Function name plus ordered literal arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallData {
    function: String,
    args: Vec<String>,
}

impl CallData {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Split an encoded data field back into selector and arguments
    pub fn parse(data: &str) -> Result<Self, RequestError> {
        let mut parts = data.split(SEPARATOR);
        let function = parts.next().unwrap_or_default();
        if function.is_empty() {
            return Err(RequestError::MissingFunction);
        }
        Ok(Self {
            function: function.to_string(),
            args: parts.map(str::to_string).collect(),
        })
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if self.function.trim().is_empty() {
            return Err(RequestError::MissingFunction);
        }
        if self.function.contains(SEPARATOR) {
            return Err(RequestError::ReservedSeparator(self.function.clone()));
        }
        if let Some(arg) = self.args.iter().find(|a| a.contains(SEPARATOR)) {
            return Err(RequestError::ReservedSeparator(arg.clone()));
        }
        Ok(())
    }

    pub fn encode(&self) -> String {
        let mut data = self.function.clone();
        for arg in &self.args {
            data.push(SEPARATOR);
            data.push_str(arg);
        }
        data
    }
}

impl fmt::Display for CallData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
