//! Parameter bundles serialize to and from JSON.

#![cfg(feature = "serde")]

use cl_termstructures::{
    Curve, NelsonSiegelParams, NelsonSiegelYield, OrnsteinUhlenbeckParams, SvenssonParams,
    VasicekParams, VolatilityParams,
};

#[test]
fn test_nelson_siegel_params_from_json() {
    let json = r#"{ "c0": 0.02, "c1": 0.04, "c2": 0.06, "lambda": 0.05 }"#;
    let params: NelsonSiegelParams = serde_json::from_str(json).unwrap();
    assert_eq!(
        params,
        NelsonSiegelParams {
            c0: 0.02,
            c1: 0.04,
            c2: 0.06,
            lambda: 0.05
        }
    );
    let curve = NelsonSiegelYield::new(params, 1.5).unwrap();
    assert_eq!(curve.value(1.5).unwrap(), 0.06);
}

#[test]
fn test_params_survive_json() {
    let sv = SvenssonParams {
        c0: 0.03,
        c1: -0.01,
        c2: 0.02,
        c3: 0.01,
        lambda1: 0.3,
        lambda2: 1.1,
    };
    let back: SvenssonParams = serde_json::from_str(&serde_json::to_string(&sv).unwrap()).unwrap();
    assert_eq!(back, sv);

    let va = VasicekParams {
        theta: 0.004,
        lambda: 0.1,
        sigma: 0.01,
        r0: 0.03,
    };
    let back: VasicekParams = serde_json::from_str(&serde_json::to_string(&va).unwrap()).unwrap();
    assert_eq!(back, va);

    let ou = OrnsteinUhlenbeckParams {
        theta: 0.02,
        lambda: 0.1,
        sigma: 0.3,
    };
    let back: OrnsteinUhlenbeckParams =
        serde_json::from_str(&serde_json::to_string(&ou).unwrap()).unwrap();
    assert_eq!(back, ou);

    let vol = VolatilityParams {
        sigma: 0.2,
        lambda: 0.05,
    };
    let back: VolatilityParams =
        serde_json::from_str(&serde_json::to_string(&vol).unwrap()).unwrap();
    assert_eq!(back, vol);
}

#[test]
fn test_missing_field_is_rejected() {
    let json = r#"{ "c0": 0.02, "c1": 0.04, "lambda": 0.05 }"#;
    assert!(serde_json::from_str::<NelsonSiegelParams>(json).is_err());
}
