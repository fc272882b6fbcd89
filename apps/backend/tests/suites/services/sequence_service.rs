// SequenceService behavior through the trait object held in AppState.

use backend::domain::Color::{Blue, Green, Red, Yellow};
use backend::DomainError;

use crate::common::{seeded_state, state_with};

#[tokio::test]
async fn reset_round_trip() {
    let app = seeded_state();
    let service = app.sequence_service();

    let reset = service.reset().await.unwrap();
    let read = service.state().await.unwrap();
    assert_eq!(reset, read);
    assert_eq!(read.level(), 1);
    assert_eq!(read.sequence().len(), 1);
}

#[tokio::test]
async fn validate_success_then_mismatch_keeps_record() {
    let app = state_with(1, vec![Green], 0);
    let service = app.sequence_service();

    let cleared = service.validate(&[Green]).await.unwrap();
    assert_eq!(cleared.level(), 2);
    assert_eq!(cleared.high_score(), 1);

    let mut wrong = cleared.sequence().to_vec();
    wrong[1] = if wrong[1] == Red { Blue } else { Red };
    let err = service.validate(&wrong).await.unwrap_err();
    let DomainError::SequenceMismatch { reset } = err else {
        panic!("expected SequenceMismatch, got {err:?}");
    };
    assert_eq!(reset.level(), 1);
    assert_eq!(reset.high_score(), 1);
}

#[tokio::test]
async fn precondition_errors_are_distinct() {
    let app = state_with(2, vec![Yellow, Yellow], 0);
    let service = app.sequence_service();

    assert!(matches!(
        service.validate(&[]).await,
        Err(DomainError::InvalidInput(_))
    ));
    assert_eq!(
        service.validate(&[Yellow, Yellow, Yellow]).await,
        Err(DomainError::LengthMismatch { expected: 2 })
    );
    assert_eq!(service.state().await.unwrap().level(), 2);
}

#[tokio::test]
async fn seeded_services_play_identically() {
    let a = seeded_state();
    let b = seeded_state();

    for _ in 0..5 {
        let sa = a.sequence_service().state().await.unwrap();
        let sb = b.sequence_service().state().await.unwrap();
        assert_eq!(sa, sb);
        a.sequence_service().validate(sa.sequence()).await.unwrap();
        b.sequence_service().validate(sb.sequence()).await.unwrap();
    }
}
