//! Registration input rules: independent pure predicates composed in a
//! fixed order, so validation failures are deterministic and testable.
//! Any failure aborts registration before a row is written.
use super::*;

/// Registered institutional email domain.
pub const EMAIL_DOMAIN: &str = "binus.ac.id";

/// The domain portion of the email must equal the institutional domain,
/// case-insensitively.
pub fn email_domain(email: &str) -> Result<(), ValidationError> {
    email
        .rsplit_once('@')
        .filter(|(local, domain)| !local.is_empty() && domain.eq_ignore_ascii_case(EMAIL_DOMAIN))
        .map(|_| ())
        .ok_or(ValidationError::InvalidEmailDomain)
}

/// One leading `2` followed by nine more digits, ten digits total.
pub fn student_id(id: &str) -> Result<(), ValidationError> {
    let digits = id.len() == 10 && id.bytes().all(|b| b.is_ascii_digit());
    match digits && id.starts_with('2') {
        true => Ok(()),
        false => Err(ValidationError::InvalidStudentId),
    }
}

/// Leading `08` followed by 8-10 further digits, 10-12 digits total.
pub fn phone(number: &str) -> Result<(), ValidationError> {
    let digits = (10..=12).contains(&number.len()) && number.bytes().all(|b| b.is_ascii_digit());
    match digits && number.starts_with("08") {
        true => Ok(()),
        false => Err(ValidationError::InvalidPhone),
    }
}

fn username(name: &str) -> Result<(), ValidationError> {
    match (3..=20).contains(&name.chars().count()) {
        true => Ok(()),
        false => Err(ValidationError::InvalidUsername),
    }
}

fn password(secret: &str) -> Result<(), ValidationError> {
    match (6..=40).contains(&secret.chars().count()) {
        true => Ok(()),
        false => Err(ValidationError::InvalidPassword),
    }
}

/// Composes the registration rules in their documented order; the first
/// failing rule wins.
pub fn registration(req: &SignupRequest) -> Result<(), ValidationError> {
    email_domain(&req.email)?;
    student_id(&req.student_id)?;
    phone(&req.phone)?;
    username(&req.username)?;
    password(&req.password)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_domain_is_case_insensitive() {
        assert!(email_domain("user@binus.ac.id").is_ok());
        assert!(email_domain("User@BINUS.AC.ID").is_ok());
        assert_eq!(
            email_domain("user@gmail.com"),
            Err(ValidationError::InvalidEmailDomain)
        );
    }

    #[test]
    fn email_needs_a_local_part_and_an_at_sign() {
        assert_eq!(
            email_domain("binus.ac.id"),
            Err(ValidationError::InvalidEmailDomain)
        );
        assert_eq!(
            email_domain("@binus.ac.id"),
            Err(ValidationError::InvalidEmailDomain)
        );
    }

    #[test]
    fn email_domain_must_match_exactly() {
        assert_eq!(
            email_domain("user@students.binus.ac.id"),
            Err(ValidationError::InvalidEmailDomain)
        );
        assert_eq!(
            email_domain("user@binus.ac.id.evil.com"),
            Err(ValidationError::InvalidEmailDomain)
        );
    }

    #[test]
    fn student_id_shape() {
        assert!(student_id("2201234567").is_ok());
        for bad in ["1201234567", "220123456", "22012345678", "220123456a", ""] {
            assert_eq!(student_id(bad), Err(ValidationError::InvalidStudentId));
        }
    }

    #[test]
    fn phone_shape() {
        assert!(phone("0812345678").is_ok());
        assert!(phone("081234567890").is_ok());
        for bad in ["0812345", "0812345678901", "0712345678", "081234567x", ""] {
            assert_eq!(phone(bad), Err(ValidationError::InvalidPhone));
        }
    }

    #[test]
    fn validation_is_idempotent() {
        for _ in 0..2 {
            assert!(email_domain("user@binus.ac.id").is_ok());
            assert!(student_id("2201234567").is_ok());
            assert!(phone("081234567890").is_ok());
        }
    }

    #[test]
    fn registration_reports_the_first_failure() {
        let mut req = SignupRequest {
            username: "jdoe".to_string(),
            email: "jdoe@binus.ac.id".to_string(),
            password: "hunter22".to_string(),
            student_id: "2201234567".to_string(),
            phone: "081234567890".to_string(),
            department: "Computer Science".to_string(),
        };
        assert!(registration(&req).is_ok());
        req.email = "jdoe@gmail.com".to_string();
        req.student_id = "bogus".to_string();
        assert_eq!(
            registration(&req),
            Err(ValidationError::InvalidEmailDomain)
        );
        req.email = "jdoe@binus.ac.id".to_string();
        assert_eq!(registration(&req), Err(ValidationError::InvalidStudentId));
    }

    #[test]
    fn username_and_password_sizes() {
        let req = |username: &str, password: &str| SignupRequest {
            username: username.to_string(),
            email: "jdoe@binus.ac.id".to_string(),
            password: password.to_string(),
            student_id: "2201234567".to_string(),
            phone: "081234567890".to_string(),
            department: "Computer Science".to_string(),
        };
        assert_eq!(
            registration(&req("ab", "hunter22")),
            Err(ValidationError::InvalidUsername)
        );
        assert_eq!(
            registration(&req("jdoe", "short")),
            Err(ValidationError::InvalidPassword)
        );
    }
}
