use std::error::Error;

use rusoto_cloudfront::{
    CreateInvalidationError, CreateMonitoringSubscriptionError, DeleteMonitoringSubscriptionError,
};
use rusoto_codepipeline::{PutJobFailureResultError, PutJobSuccessResultError};
use rusoto_core::RusotoError;
use rusoto_lambda::UpdateFunctionCodeError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum DeployHandlerError {
    InvalidRequestType(String),
    MissingResourceProperty(&'static str),
    CreateSubscriptionError(RusotoError<CreateMonitoringSubscriptionError>),
    DeleteSubscriptionError(RusotoError<DeleteMonitoringSubscriptionError>),
    CreateInvalidationError(RusotoError<CreateInvalidationError>),
    UpdateFunctionCodeError(RusotoError<UpdateFunctionCodeError>),
    PutJobSuccessError(RusotoError<PutJobSuccessResultError>),
    PutJobFailureError(RusotoError<PutJobFailureResultError>),
}

impl Display for DeployHandlerError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            DeployHandlerError::InvalidRequestType(ref request_type) => {
                write!(f, "Invalid request type: {}", request_type)
            }
            DeployHandlerError::MissingResourceProperty(key) => {
                write!(f, "Missing resource property: {}", key)
            }
            DeployHandlerError::CreateSubscriptionError(ref error) => {
                std::fmt::Display::fmt(error, f)
            }
            DeployHandlerError::DeleteSubscriptionError(ref error) => {
                std::fmt::Display::fmt(error, f)
            }
            DeployHandlerError::CreateInvalidationError(ref error) => {
                std::fmt::Display::fmt(error, f)
            }
            DeployHandlerError::UpdateFunctionCodeError(ref error) => {
                std::fmt::Display::fmt(error, f)
            }
            DeployHandlerError::PutJobSuccessError(ref error) => std::fmt::Display::fmt(error, f),
            DeployHandlerError::PutJobFailureError(ref error) => std::fmt::Display::fmt(error, f),
        }
    }
}

impl Error for DeployHandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            DeployHandlerError::CreateSubscriptionError(ref error) => Some(error),
            DeployHandlerError::DeleteSubscriptionError(ref error) => Some(error),
            DeployHandlerError::CreateInvalidationError(ref error) => Some(error),
            DeployHandlerError::UpdateFunctionCodeError(ref error) => Some(error),
            DeployHandlerError::PutJobSuccessError(ref error) => Some(error),
            DeployHandlerError::PutJobFailureError(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<RusotoError<CreateMonitoringSubscriptionError>> for DeployHandlerError {
    fn from(e: RusotoError<CreateMonitoringSubscriptionError>) -> DeployHandlerError {
        DeployHandlerError::CreateSubscriptionError(e)
    }
}

impl From<RusotoError<DeleteMonitoringSubscriptionError>> for DeployHandlerError {
    fn from(e: RusotoError<DeleteMonitoringSubscriptionError>) -> DeployHandlerError {
        DeployHandlerError::DeleteSubscriptionError(e)
    }
}

impl From<RusotoError<CreateInvalidationError>> for DeployHandlerError {
    fn from(e: RusotoError<CreateInvalidationError>) -> DeployHandlerError {
        DeployHandlerError::CreateInvalidationError(e)
    }
}

impl From<RusotoError<UpdateFunctionCodeError>> for DeployHandlerError {
    fn from(e: RusotoError<UpdateFunctionCodeError>) -> DeployHandlerError {
        DeployHandlerError::UpdateFunctionCodeError(e)
    }
}

impl From<RusotoError<PutJobSuccessResultError>> for DeployHandlerError {
    fn from(e: RusotoError<PutJobSuccessResultError>) -> DeployHandlerError {
        DeployHandlerError::PutJobSuccessError(e)
    }
}

impl From<RusotoError<PutJobFailureResultError>> for DeployHandlerError {
    fn from(e: RusotoError<PutJobFailureResultError>) -> DeployHandlerError {
        DeployHandlerError::PutJobFailureError(e)
    }
}
