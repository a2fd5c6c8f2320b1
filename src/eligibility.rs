use thiserror::Error;

pub const MINIMUM_VOTING_AGE: u32 = 18;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Age {age} is too young to vote. Minimum age is {}.", MINIMUM_VOTING_AGE)]
pub struct InvalidAgeError {
    pub age: u32,
}

pub fn check_age(age: u32) -> Result<(), InvalidAgeError> {
    if age < MINIMUM_VOTING_AGE {
        return Err(InvalidAgeError { age });
    }
    Ok(())
}
