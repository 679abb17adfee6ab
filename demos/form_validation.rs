//! Form validation example
//!
//! A signup form with five independent fields. Every field is checked on its own and the
//! results are combined, so the user sees every problem with the form at once instead of
//! fixing them one submit at a time.
//!
//! Run with: cargo run --example form_validation

use accrue::{combine, NonEmptyVec, Validation};

// Domain types
#[derive(Debug, Clone, PartialEq)]
struct Email(String);

#[derive(Debug, Clone, PartialEq)]
struct Password(String);

#[derive(Debug, Clone, PartialEq)]
struct Age(u8);

#[derive(Debug)]
struct User {
    username: String,
    email: Email,
    password: Password,
    age: Age,
    accepted_terms: bool,
}

// Raw input from form
struct SignupForm {
    username: &'static str,
    email: &'static str,
    password: &'static str,
    age: &'static str,
    accepted_terms: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum FormError {
    UsernameTooShort { min_length: usize },
    InvalidEmail { value: String },
    PasswordTooShort { min_length: usize },
    InvalidAge { value: String },
    AgeTooYoung { age: u8, minimum: u8 },
    TermsNotAccepted,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::UsernameTooShort { min_length } => {
                write!(f, "username must be at least {} characters", min_length)
            }
            FormError::InvalidEmail { value } => write!(f, "'{}' is not an email address", value),
            FormError::PasswordTooShort { min_length } => {
                write!(f, "password must be at least {} characters", min_length)
            }
            FormError::InvalidAge { value } => write!(f, "'{}' is not a valid age", value),
            FormError::AgeTooYoung { age, minimum } => {
                write!(f, "age {} is below the minimum of {}", age, minimum)
            }
            FormError::TermsNotAccepted => write!(f, "terms must be accepted"),
        }
    }
}

fn validate_username(username: &str) -> Validation<String, FormError> {
    const MIN_LENGTH: usize = 3;
    if username.chars().count() >= MIN_LENGTH {
        Validation::success(username.to_string())
    } else {
        Validation::failure(FormError::UsernameTooShort {
            min_length: MIN_LENGTH,
        })
    }
}

fn validate_email(email: &str) -> Validation<Email, FormError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => {
            Validation::success(Email(email.to_string()))
        }
        _ => Validation::failure(FormError::InvalidEmail {
            value: email.to_string(),
        }),
    }
}

fn validate_password(password: &str) -> Validation<Password, FormError> {
    const MIN_LENGTH: usize = 8;
    if password.len() >= MIN_LENGTH {
        Validation::success(Password(password.to_string()))
    } else {
        Validation::failure(FormError::PasswordTooShort {
            min_length: MIN_LENGTH,
        })
    }
}

// Parsing and the minimum-age rule depend on each other, so they chain with and_then
fn validate_age(age: &str) -> Validation<Age, FormError> {
    const MINIMUM: u8 = 13;
    Validation::from_result(age.trim().parse::<u8>().map_err(|_| FormError::InvalidAge {
        value: age.to_string(),
    }))
    .and_then(|age| {
        if age >= MINIMUM {
            Validation::success(Age(age))
        } else {
            Validation::failure(FormError::AgeTooYoung {
                age,
                minimum: MINIMUM,
            })
        }
    })
}

fn validate_terms(accepted: bool) -> Validation<bool, FormError> {
    if accepted {
        Validation::success(true)
    } else {
        Validation::failure(FormError::TermsNotAccepted)
    }
}

fn validate_form(form: &SignupForm) -> Validation<User, NonEmptyVec<FormError>> {
    combine((
        validate_username(form.username),
        validate_email(form.email),
        validate_password(form.password),
        validate_age(form.age),
        validate_terms(form.accepted_terms),
    ))
    .apply(|username, email, password, age, accepted_terms| User {
        username,
        email,
        password,
        age,
        accepted_terms,
    })
}

fn report(label: &str, form: &SignupForm) {
    println!("\n=== {} ===", label);
    match validate_form(form) {
        Validation::Success(user) => println!("Registered: {:?}", user),
        Validation::Failure(errors) => {
            println!("{} problem(s) found:", errors.len());
            for error in errors {
                println!("  - {}", error);
            }
        }
    }
}

fn main() {
    report(
        "Valid form",
        &SignupForm {
            username: "alice",
            email: "alice@example.com",
            password: "correct horse",
            age: "34",
            accepted_terms: true,
        },
    );

    report(
        "Every field wrong",
        &SignupForm {
            username: "al",
            email: "alice.example.com",
            password: "hunter2",
            age: "nine",
            accepted_terms: false,
        },
    );

    report(
        "Only the age is wrong",
        &SignupForm {
            username: "bob",
            email: "bob@example.org",
            password: "a long passphrase",
            age: "11",
            accepted_terms: true,
        },
    );
}
