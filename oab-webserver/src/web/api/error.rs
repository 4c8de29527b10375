use super::json_error_response;
use oab_core::usecases::Error as ParameterError;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Parameter(err) => {
                let status = match err {
                    ParameterError::MissingBody
                    | ParameterError::IncompleteRequest
                    | ParameterError::MissingUserId => Status::BadRequest,
                    ParameterError::UnverifiableAddress | ParameterError::AddressNotFound => {
                        Status::NotFound
                    }
                    ParameterError::Geocoding(_) | ParameterError::Repo(_) => {
                        error!("Error: {err}");
                        Status::InternalServerError
                    }
                };
                json_error_response(req, &err, status)
            }
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
        }
    }
}
