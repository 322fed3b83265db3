use std::sync::Arc;
use crate::domain::{
    models::rsvp::{Attending, MealChoice, MealCount, NewRsvp, RsvpForm, RsvpReceipt, RsvpSubmission, RsvpSummary},
    ports::RsvpRepository,
    services::{
        rate_limiter::SlidingWindowRateLimiter,
        sanitizer::sanitize,
        validation::{is_valid_email, validate_field, validate_required},
    },
};
use crate::error::AppError;
use tracing::{debug, info, warn};

pub struct RsvpService {
    repo: Arc<dyn RsvpRepository>,
    limiter: Arc<SlidingWindowRateLimiter>,
}

impl RsvpService {
    pub fn new(repo: Arc<dyn RsvpRepository>, limiter: Arc<SlidingWindowRateLimiter>) -> Self {
        Self { repo, limiter }
    }

    /// Runs a submission through rate check, validation, sanitization and
    /// storage, stopping at the first failure.
    ///
    /// The rate check comes first, so every call that gets past it spends
    /// budget even if validation then rejects the form.
    pub async fn submit(&self, client_id: &str, form: RsvpForm) -> Result<RsvpReceipt, AppError> {
        if !self.limiter.check_and_record(client_id) {
            let retry_after_secs = self.limiter.retry_after(client_id).as_secs_f64().ceil() as u64;
            warn!(client_id, retry_after_secs, "RSVP rate limited");
            return Err(AppError::RateLimited { retry_after_secs });
        }

        validate_required(&form).map_err(|e| {
            debug!(client_id, "RSVP rejected: {}", e);
            AppError::Validation(e)
        })?;

        let name = sanitize(&form.name);
        let email = sanitize(&form.email);
        let meal_raw = sanitize(&form.meal_choice);
        let plus_one_name = non_empty(sanitize(&form.plus_one_name));
        let dietary_restrictions = non_empty(sanitize(&form.dietary_restrictions));

        if !is_valid_email(&email) {
            return Err(AppError::Validation("Please enter a valid email address".into()));
        }
        if let Some(e) = validate_field("name", &name, &form) {
            return Err(AppError::Validation(e));
        }

        let attending = Attending::parse(&form.attending)
            .ok_or_else(|| AppError::Validation("Please let us know if you can attend".into()))?;

        let meal_choice = match attending {
            Attending::Yes => {
                if let Some(e) = validate_field("mealChoice", &meal_raw, &form) {
                    return Err(AppError::Validation(e));
                }
                Some(MealChoice::parse(&meal_raw)
                    .ok_or_else(|| AppError::Validation("Please select a meal choice".into()))?)
            }
            Attending::No => None,
        };

        let stored = self.repo.append(NewRsvp {
            name,
            email,
            attending,
            meal_choice,
            plus_one_name,
            dietary_restrictions,
        }).await?;

        info!(rsvp_id = %stored.id, attending = ?stored.attending, "RSVP accepted");
        Ok(RsvpReceipt { id: stored.id })
    }

    pub async fn all(&self) -> Result<Vec<RsvpSubmission>, AppError> {
        self.repo.all().await
    }

    pub async fn summary(&self) -> Result<RsvpSummary, AppError> {
        let rsvps = self.repo.all().await?;
        Ok(summarize(&rsvps))
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

pub fn summarize(rsvps: &[RsvpSubmission]) -> RsvpSummary {
    let mut summary = RsvpSummary {
        total_responses: rsvps.len() as u32,
        meals: MealChoice::ALL.iter().map(|m| MealCount { meal: *m, count: 0 }).collect(),
        ..Default::default()
    };

    for rsvp in rsvps {
        match rsvp.attending {
            Attending::Yes => summary.attending += 1,
            Attending::No => summary.declined += 1,
        }
        if rsvp.attending == Attending::Yes && rsvp.plus_one_name.is_some() {
            summary.plus_ones += 1;
        }
        summary.expected_guests += rsvp.party_size();

        if let Some(meal) = rsvp.meal_choice
            && let Some(slot) = summary.meals.iter_mut().find(|c| c.meal == meal) {
            slot.count += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::clock::ManualClock;
    use crate::infra::repositories::memory_rsvp_repo::InMemoryRsvpRepo;
    use chrono::Duration;

    struct Fixture {
        clock: Arc<ManualClock>,
        repo: Arc<InMemoryRsvpRepo>,
        service: RsvpService,
    }

    fn fixture(max_requests: usize) -> Fixture {
        let clock = Arc::new(ManualClock::default());
        let repo = Arc::new(InMemoryRsvpRepo::new(clock.clone()));
        let limiter = Arc::new(SlidingWindowRateLimiter::new(
            max_requests,
            std::time::Duration::from_millis(60_000),
            clock.clone(),
        ));
        let service = RsvpService::new(repo.clone(), limiter);
        Fixture { clock, repo, service }
    }

    fn jane() -> RsvpForm {
        RsvpForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            attending: "yes".into(),
            meal_choice: "chicken".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_happy_path() {
        let f = fixture(3);
        let receipt = f.service.submit("ip", jane()).await.unwrap();
        assert_eq!(receipt.id, "RSVP-1");

        let stored = f.repo.all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].meal_choice, Some(MealChoice::Chicken));
        assert_eq!(stored[0].plus_one_name, None);
    }

    #[tokio::test]
    async fn test_malformed_inputs_rejected() {
        let cases = vec![
            RsvpForm { name: "".into(), ..jane() },
            RsvpForm { name: "J".into(), ..jane() },
            RsvpForm { email: "".into(), ..jane() },
            RsvpForm { email: "jane@example".into(), ..jane() },
            RsvpForm { attending: "".into(), ..jane() },
            RsvpForm { meal_choice: "".into(), ..jane() },
        ];

        for form in cases {
            let f = fixture(100);
            match f.service.submit("ip", form.clone()).await {
                Err(AppError::Validation(msg)) => assert!(!msg.is_empty()),
                other => panic!("expected validation error for {:?}, got {:?}", form, other),
            }
            assert!(f.repo.all().await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_sanitized_before_storage() {
        let f = fixture(3);
        let form = RsvpForm {
            name: "<script>alert(1)</script>Jane".into(),
            dietary_restrictions: "<b>no nuts</b>".into(),
            ..jane()
        };
        f.service.submit("ip", form).await.unwrap();

        let stored = &f.repo.all().await.unwrap()[0];
        assert_eq!(stored.name, "Jane");
        assert_eq!(stored.dietary_restrictions.as_deref(), Some("no nuts"));
    }

    #[tokio::test]
    async fn test_name_that_sanitizes_to_nothing_rejected() {
        let f = fixture(3);
        let form = RsvpForm { name: "<script>x</script>".into(), ..jane() };
        assert!(matches!(f.service.submit("ip", form).await, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_declining_guest_never_needs_meal() {
        let f = fixture(3);
        let form = RsvpForm { attending: "no".into(), meal_choice: "".into(), ..jane() };
        f.service.submit("ip", form).await.unwrap();

        let form = RsvpForm { attending: "no".into(), meal_choice: "fish".into(), ..jane() };
        f.service.submit("ip", form).await.unwrap();

        let stored = f.repo.all().await.unwrap();
        assert!(stored.iter().all(|r| r.meal_choice.is_none()));
    }

    #[tokio::test]
    async fn test_rate_limit_before_validation() {
        let f = fixture(3);
        for _ in 0..3 {
            let _ = f.service.submit("ip", RsvpForm::default()).await;
        }
        let res = f.service.submit("ip", jane()).await;
        assert!(matches!(res, Err(AppError::RateLimited { retry_after_secs: 60 })));

        f.clock.advance(Duration::seconds(60));
        assert!(f.service.submit("ip", jane()).await.is_ok());
    }

    #[tokio::test]
    async fn test_summary_counts() {
        let f = fixture(10);
        f.service.submit("ip", RsvpForm { plus_one_name: "Sam".into(), ..jane() }).await.unwrap();
        f.service.submit("ip", RsvpForm { meal_choice: "vegan".into(), ..jane() }).await.unwrap();
        f.service.submit("ip", RsvpForm { attending: "no".into(), ..jane() }).await.unwrap();

        let s = f.service.summary().await.unwrap();
        assert_eq!(s.total_responses, 3);
        assert_eq!(s.attending, 2);
        assert_eq!(s.declined, 1);
        assert_eq!(s.plus_ones, 1);
        assert_eq!(s.expected_guests, 3);

        let count = |m: MealChoice| s.meals.iter().find(|c| c.meal == m).map(|c| c.count);
        assert_eq!(count(MealChoice::Chicken), Some(1));
        assert_eq!(count(MealChoice::Vegan), Some(1));
        assert_eq!(count(MealChoice::Beef), Some(0));
    }
}
