use drill_core::model::VerbForm;
use drill_core::time::fixed_now;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{
    AnswerStep, Clock, OutcomeTier, QuizFlowError, QuizLoopService, load_questions,
};

const TABLE: &str = "\u{feff}verb,meaning,past,ing\r\nrun,走る,ran,running\r\ngo,\"行く, 去る\",went,going\r\n";

#[test]
fn full_quiz_flow_scores_and_reviews_missed_questions() {
    let pool = load_questions(TABLE).unwrap();
    assert_eq!(pool.len(), 4);

    let flow = QuizLoopService::new(Clock::fixed(fixed_now())).with_sample_size(4);
    let mut session = flow
        .start_quiz_with_rng(&pool, &mut StdRng::seed_from_u64(7))
        .unwrap();

    // Answer past forms correctly (sloppy casing and spacing on purpose),
    // miss both progressive forms.
    let mut expected_missed = Vec::new();
    let mut report = None;
    while let Some(question) = session.current_question().cloned() {
        let answer = match question.form() {
            VerbForm::Past => format!("  {}  ", question.answer().to_uppercase()),
            VerbForm::Progressive => {
                expected_missed.push(question.clone());
                "ちがう".to_string()
            }
        };
        match flow.answer_current(&mut session, &answer).unwrap() {
            AnswerStep::Next(_) => {}
            AnswerStep::Finished(finished) => report = Some(finished),
        }
    }

    let report = report.expect("session should finish with a report");
    assert_eq!(report.score.correct, 2);
    assert_eq!(report.score.total, 4);
    assert_eq!(report.score.accuracy_percent, 50);
    assert_eq!(report.tier, OutcomeTier::Good);
    assert_eq!(report.date_stamp, "2025年06月15日");
    assert!(report.offer_review);
    assert_eq!(report.rows.len(), 4);

    // Missed questions surface in encounter order.
    assert_eq!(session.review_set(), expected_missed.as_slice());

    // Review pass: both progressive forms, answered correctly this time.
    let mut review = flow.start_review(&session).unwrap();
    assert_eq!(review.total_questions(), 2);

    let mut review_report = None;
    while let Some(question) = review.current_question().cloned() {
        match flow.answer_current(&mut review, question.answer()).unwrap() {
            AnswerStep::Next(_) => {}
            AnswerStep::Finished(finished) => review_report = Some(finished),
        }
    }

    let review_report = review_report.expect("review should finish with a report");
    assert_eq!(review_report.score.accuracy_percent, 100);
    assert_eq!(review_report.tier, OutcomeTier::Perfect);
    assert!(!review_report.offer_review);

    // A clean pass leaves nothing further to review.
    assert!(matches!(
        flow.start_review(&review),
        Err(QuizFlowError::NothingToReview)
    ));
}

#[test]
fn quiz_draws_a_subset_of_a_larger_pool() {
    let mut table = String::from("verb,meaning,past,ing\n");
    for i in 0..30 {
        table.push_str(&format!("verb{i},意味{i},past{i},ing{i}\n"));
    }

    let pool = load_questions(&table).unwrap();
    assert_eq!(pool.len(), 60);

    let flow = QuizLoopService::new(Clock::fixed(fixed_now()));
    let session = flow
        .start_quiz_with_rng(&pool, &mut StdRng::seed_from_u64(11))
        .unwrap();

    assert_eq!(session.total_questions(), services::DEFAULT_QUIZ_SIZE);
}
