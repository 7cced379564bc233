//! Pipeline Tests
//!
//! Scaler + regressor + banding run end to end through `GradePredictor`.

#[cfg(test)]
mod pipeline_tests {
    use std::sync::Arc;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::logic::error::{InferenceError, PipelineError, ShapeError};
    use crate::logic::features::{FeatureVector, StudentInput, YesNo, FEATURE_COUNT};
    use crate::logic::model::{
        GradeBand, GradePredictor, LinearRegressor, NormalizedVector, Regressor, StandardScaler,
    };

    /// Scaler fitted on the Portuguese-class dataset (rounded)
    fn fitted_scaler() -> StandardScaler {
        StandardScaler::new(
            vec![11.40, 11.57, 3.66, 0.49, 0.06, 0.22, 1.93],
            vec![2.74, 2.91, 4.64, 0.50, 0.24, 0.59, 0.83],
        )
        .unwrap()
    }

    /// Model that returns `score` whatever the input
    fn constant_model(score: f64) -> LinearRegressor {
        LinearRegressor::new(vec![0.0; FEATURE_COUNT], score).unwrap()
    }

    fn predictor(score: f64) -> GradePredictor {
        GradePredictor::new(Arc::new(fitted_scaler()), Arc::new(constant_model(score)))
    }

    fn scenario_vector() -> FeatureVector {
        FeatureVector::from_values([10.0, 10.0, 5.0, 1.0, 0.0, 0.0, 2.0])
    }

    struct FailingModel;

    impl Regressor for FailingModel {
        fn infer(&self, _: &NormalizedVector) -> Result<f64, InferenceError> {
            Err(InferenceError::Backend("session poisoned".to_string()))
        }

        fn input_dim(&self) -> usize {
            FEATURE_COUNT
        }
    }

    struct NanModel;

    impl Regressor for NanModel {
        fn infer(&self, _: &NormalizedVector) -> Result<f64, InferenceError> {
            Ok(f64::NAN)
        }

        fn input_dim(&self) -> usize {
            FEATURE_COUNT
        }
    }

    #[test]
    fn test_scenario_adequate_mid_band() {
        let result = predictor(5.0).predict(&scenario_vector()).unwrap();
        assert_eq!(result.label(), "Grade Cukup");
        assert_eq!(result.score, 5.0);
    }

    #[test]
    fn test_scenario_low() {
        let result = predictor(1.5).predict(&scenario_vector()).unwrap();
        assert_eq!(result.band, GradeBand::Low);
        assert_eq!(result.label(), "Grade Rendah");
    }

    #[test]
    fn test_scenario_upper_boundary_inclusive() {
        let result = predictor(6.0).predict(&scenario_vector()).unwrap();
        assert_eq!(result.label(), "Grade Cukup");
        assert_eq!(result.score, 6.0);
    }

    #[test]
    fn test_scenario_high() {
        let result = predictor(15.0).predict(&scenario_vector()).unwrap();
        assert_eq!(result.label(), "Grade Tinggi");
    }

    #[test]
    fn test_lower_boundary_is_low() {
        let result = predictor(2.0).predict(&scenario_vector()).unwrap();
        assert_eq!(result.band, GradeBand::Low);
    }

    #[test]
    fn test_score_is_raw_model_output() {
        let scaler = fitted_scaler();
        let model = LinearRegressor::new(vec![0.4, 2.7, 0.1, -0.05, -0.02, -0.3, 0.06], 11.9).unwrap();
        let vector = scenario_vector();

        let expected = model.infer(&scaler.normalize(vector.as_slice()).unwrap()).unwrap();
        let predictor = GradePredictor::new(Arc::new(scaler), Arc::new(model));
        let result = predictor.predict(&vector).unwrap();

        assert_eq!(result.score, expected);
        assert_eq!(result.band, predictor.banding().classify(result.score));
    }

    #[test]
    fn test_negative_and_large_scores_not_clipped() {
        let low = predictor(-3.25).predict(&scenario_vector()).unwrap();
        assert_eq!(low.score, -3.25);
        assert_eq!(low.band, GradeBand::Low);

        let high = predictor(27.5).predict(&scenario_vector()).unwrap();
        assert_eq!(high.score, 27.5);
        assert_eq!(high.band, GradeBand::High);
    }

    #[test]
    fn test_determinism_over_random_inputs() {
        let scaler = fitted_scaler();
        let model = LinearRegressor::new(vec![0.3, 2.9, 0.05, -0.1, 0.0, -0.4, 0.1], 11.6).unwrap();
        let predictor = GradePredictor::new(Arc::new(scaler), Arc::new(model));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let vector = FeatureVector::from_values([
                f64::from(rng.gen_range(0u8..=20)),
                f64::from(rng.gen_range(0u8..=20)),
                f64::from(rng.gen_range(0u32..=40)),
                f64::from(rng.gen_range(0u8..=1)),
                f64::from(rng.gen_range(0u8..=1)),
                f64::from(rng.gen_range(0u8..=5)),
                f64::from(rng.gen_range(1u8..=4)),
            ]);

            let first = predictor.predict(&vector).unwrap();
            let second = predictor.predict(&vector).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.band, predictor.banding().classify(first.score));
        }
    }

    #[test]
    fn test_wrong_length_is_shape_error() {
        let predictor = predictor(5.0);

        for len in [0usize, 6, 8] {
            let values = vec![1.0; len];
            match predictor.predict_raw(&values) {
                Err(PipelineError::Shape(ShapeError::Length { expected, actual })) => {
                    assert_eq!(expected, FEATURE_COUNT);
                    assert_eq!(actual, len);
                }
                other => panic!("Expected ShapeError for len {}, got {:?}", len, other),
            }
        }
    }

    #[test]
    fn test_model_failure_is_inference_error() {
        let predictor = GradePredictor::new(Arc::new(fitted_scaler()), Arc::new(FailingModel));
        assert!(matches!(
            predictor.predict(&scenario_vector()),
            Err(PipelineError::Inference(InferenceError::Backend(_)))
        ));
    }

    #[test]
    fn test_non_finite_score_is_inference_error() {
        let predictor = GradePredictor::new(Arc::new(fitted_scaler()), Arc::new(NanModel));
        assert!(matches!(
            predictor.predict(&scenario_vector()),
            Err(PipelineError::Inference(InferenceError::NonFinite(_)))
        ));
    }

    #[test]
    fn test_model_dimension_mismatch_is_inference_error() {
        let model = LinearRegressor::new(vec![1.0; 5], 0.0).unwrap();
        let predictor = GradePredictor::new(Arc::new(fitted_scaler()), Arc::new(model));
        assert!(matches!(
            predictor.predict(&scenario_vector()),
            Err(PipelineError::Inference(InferenceError::Dimension { expected: 5, actual: 7 }))
        ));
    }

    #[test]
    fn test_typed_input_through_pipeline() {
        let input = StudentInput {
            activities: YesNo::Yes,
            paid: YesNo::No,
            ..Default::default()
        };
        let vector = input.to_validated_vector().unwrap();
        assert_eq!(vector, scenario_vector());

        let result = predictor(5.0).predict(&vector).unwrap();
        assert_eq!(result.to_string(), "Grade Cukup: 5");
    }

    #[test]
    fn test_shared_across_threads() {
        let shared = Arc::new(predictor(15.0));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let p = Arc::clone(&shared);
                std::thread::spawn(move || {
                    (0..50)
                        .map(|_| p.predict(&scenario_vector()).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for result in handle.join().unwrap() {
                assert_eq!(result.band, GradeBand::High);
                assert_eq!(result.score, 15.0);
            }
        }
        assert_eq!(shared.status().prediction_count, 200);
    }
}
