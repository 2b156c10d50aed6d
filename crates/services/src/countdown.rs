use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use pylearn_core::session::{ActivitySession, TickOutcome};

use crate::practice::{ActivitySubmission, PracticeService};

/// Interval between countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Spawn a task that ticks `session` once per second.
///
/// The task is bound to the attempt that is current when this is called.
/// When the countdown reaches zero the session submits itself and the grade
/// is recorded through `practice`. If a tick finds the session submitted,
/// closed or reset into a later attempt, the task ends with `None`; a
/// session without a time limit ends it on the first tick.
pub async fn run_countdown(
    session: Arc<Mutex<ActivitySession>>,
    practice: Arc<PracticeService>,
) -> JoinHandle<Option<ActivitySubmission>> {
    let attempt = session.lock().await.attempt();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        // The first tick completes immediately.
        interval.tick().await;

        loop {
            interval.tick().await;
            let (activity_id, outcome) = {
                let mut session = session.lock().await;
                if session.attempt() != attempt {
                    tracing::debug!(
                        activity_id = %session.activity().id(),
                        "attempt replaced; countdown stopped"
                    );
                    return None;
                }
                (session.activity().id(), session.tick())
            };
            match outcome {
                TickOutcome::Running { remaining_secs } => {
                    tracing::trace!(activity_id = %activity_id, remaining_secs, "countdown tick");
                }
                TickOutcome::Expired(grade) => {
                    tracing::info!(activity_id = %activity_id, score = grade.score, "countdown expired");
                    return Some(practice.record_activity(activity_id, grade).await);
                }
                TickOutcome::Idle => return None,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pylearn_core::Catalog;
    use pylearn_core::model::{ActivityId, UserProgress};
    use pylearn_core::session::SessionPhase;
    use tokio::time::Instant;

    use crate::progress_service::ProgressService;

    fn practice() -> Arc<PracticeService> {
        Arc::new(PracticeService::new(
            Arc::new(Catalog::builtin().unwrap()),
            Arc::new(ProgressService::new(UserProgress::default())),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_submits_selected_answers_once() {
        let practice = practice();
        let mut session = practice.start_activity(ActivityId::new(6)).unwrap();
        session.select(0, 1);
        session.select(1, 1);
        let session = Arc::new(Mutex::new(session));

        let submission = run_countdown(Arc::clone(&session), Arc::clone(&practice))
            .await
            .await
            .unwrap()
            .expect("countdown expired");

        // 2 of 3 correct on a 35-point quiz.
        assert_eq!(submission.grade.score, 23);
        assert_eq!(session.lock().await.phase(), SessionPhase::Submitted);
        assert_eq!(practice.progress().snapshot().await.total_score(), 23);
        assert!(practice.submit_activity(&mut *session.lock().await).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn manual_submit_stops_the_countdown() {
        let practice = practice();
        let session = Arc::new(Mutex::new(
            practice.start_activity(ActivityId::new(6)).unwrap(),
        ));
        let handle = run_countdown(Arc::clone(&session), Arc::clone(&practice)).await;

        tokio::time::sleep(Duration::from_millis(2500)).await;
        let manual = practice
            .submit_activity(&mut *session.lock().await)
            .await
            .expect("manual submit");
        assert_eq!(manual.grade.score, 0);

        assert!(handle.await.unwrap().is_none());
        let snapshot = practice.progress().snapshot().await;
        assert_eq!(snapshot.current_streak(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_attempt_is_not_ticked_by_the_previous_countdown() {
        let practice = practice();
        let session = Arc::new(Mutex::new(
            practice.start_activity(ActivityId::new(6)).unwrap(),
        ));
        let stale = run_countdown(Arc::clone(&session), Arc::clone(&practice)).await;

        tokio::time::sleep(Duration::from_millis(1500)).await;
        {
            let mut guard = session.lock().await;
            assert!(practice.submit_activity(&mut guard).await.is_some());
            assert!(guard.reset());
        }
        let started = Instant::now();
        let current = run_countdown(Arc::clone(&session), Arc::clone(&practice)).await;

        tokio::time::sleep(Duration::from_millis(10_500)).await;
        assert_eq!(session.lock().await.remaining_secs(), Some(290));

        let submission = current.await.unwrap().expect("second attempt expired");
        assert!(started.elapsed() >= Duration::from_secs(300));
        assert_eq!(submission.grade.score, 0);
        assert!(stale.await.unwrap().is_none());
    }
}
