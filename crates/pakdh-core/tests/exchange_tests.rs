use num_bigint::BigUint;
use num_traits::Zero;
use pakdh_core::exchange::ClientContext;
use pakdh_core::group::GroupId;
use pakdh_core::oracle::BlindingOracle;
use pakdh_core::types::PakError;

const PASSWORD: &[u8] = b"password123";
const A: &[u8] = b"A";
const B: &[u8] = b"B";

fn blinding_factor(oracle: BlindingOracle) -> BigUint {
    let message = [A, B, PASSWORD].concat();
    oracle.digest(&message).unwrap().to_biguint()
}

fn context() -> ClientContext {
    ClientContext::with_group_bits(PASSWORD, 1024).unwrap()
}

fn fixed_publics(context: &ClientContext) -> (BigUint, BigUint) {
    let ra = BigUint::parse_bytes("c0ffee".repeat(16).as_bytes(), 16).unwrap();
    let rb = BigUint::parse_bytes("badc0de5".repeat(12).as_bytes(), 16).unwrap();
    (context.group().pow_generator(&ra), context.group().pow_generator(&rb))
}

#[test]
fn empty_password_is_rejected() {
    assert_eq!(
        ClientContext::new(b"", GroupId::Modp1024).unwrap_err(),
        PakError::InvalidConfiguration
    );
}

#[test]
fn undefined_group_is_rejected() {
    assert_eq!(
        ClientContext::with_group_bits(PASSWORD, 2048).unwrap_err(),
        PakError::InvalidConfiguration
    );
}

#[test]
fn context_debug_hides_password() {
    let rendered = format!("{:?}", context());
    assert!(!rendered.contains("password123"));
    assert!(rendered.contains("REDACTED"));
}

#[test]
fn known_answer_exchange() {
    let ctx = context();
    let (g_ra, g_rb) = fixed_publics(&ctx);
    assert_eq!(
        g_ra.to_str_radix(16),
        concat!(
            "e07119834a6478f8cea0ab0418624eb17351809dd3c5d7ee818ce44995d7b6ae",
            "9e88726a52018ece1fa781c8a998bc806ea37b92e70f78364f2196cf785900e8",
            "b88758f5c6902f2467e452bdfd72bf976c77c1aeb6b5af5f3c9c1281be8b182c",
            "65b743e50de82d684ce9d0094b1a6061eec4b0786fc0892aa240b166ed6c0874",
        )
    );

    let x = ctx.compute_blinded(A, B, &g_ra, BlindingOracle::H1).unwrap();
    assert_eq!(
        x.to_str_radix(16),
        concat!(
            "63b795a7854c288bfb4cf17232dd4349e3c7fe5c2ce24750baafd146b38fde43",
            "4f3badfb7949d1e128589d35f85f481f7bbd851d9cfb48ab0b6133dd68125993",
            "2bf8b270f471c031ecb793b5d9f1e238521750caedc8858cc20ade76a9de3118",
            "f38bb80a30d1b56fce25db8aba66beea4225b98d7c67cff67f645beb7354d622",
            "da7dab3f8da70c0563ef09a448f9ba3ccf2fcc2ffbaceea2dafc132212d9cf93",
            "95f3c388b212785df59c0179e4a87c84a831198f4653aecaee732d2b6fd29aaa",
            "94d63a2f7e3f624dee542eed39d84699b53167cd5ef1b7dc981fc65f160da0d6",
            "a54e625bc3984be4d9f2385475f0edeb80677fe478030fe28307207729e826cc",
            "369c632e2331e3cd9040d6afcc1571fc",
        )
    );

    let s1 = ctx.compute_confirmation1(A, B, &g_ra, &g_rb).unwrap();
    let s2 = ctx.compute_confirmation2(A, B, &g_ra, &g_rb).unwrap();
    let k = ctx.compute_session_key(A, B, &g_ra, &g_rb).unwrap();
    assert_eq!(s1.to_hex(), "debadfa1364395b370dce1a5c60d4583");
    assert_eq!(s2.to_hex(), "3bdfeeba837ef4606bb4774cb21a6c7d");
    assert_eq!(k.to_hex(), "592ae1581de562e21dee199204db34bd");
}

#[test]
fn session_key_ignores_identities() {
    let ctx = context();
    let (g_ra, g_rb) = fixed_publics(&ctx);

    let k = ctx.compute_session_key(A, B, &g_ra, &g_rb).unwrap();
    let k_other = ctx.compute_session_key(b"alice", b"bob", &g_ra, &g_rb).unwrap();
    assert_eq!(k, k_other);

    let s1 = ctx.compute_confirmation1(A, B, &g_ra, &g_rb).unwrap();
    let s1_other = ctx.compute_confirmation1(b"alice", b"bob", &g_ra, &g_rb).unwrap();
    assert_ne!(s1, s1_other);
}

#[test]
fn concrete_scenario_both_sides_agree() {
    let ctx = context();

    let a_pair = ctx.generate_ephemeral().unwrap();
    let x = ctx.compute_blinded(A, B, &a_pair.public, BlindingOracle::H1).unwrap();
    let xab = ctx.recover_peer_public(A, B, &x, BlindingOracle::H1).unwrap();
    assert_eq!(xab.to_str_radix(16), a_pair.public.to_str_radix(16));

    let b_pair = ctx.generate_ephemeral().unwrap();
    let y = ctx.compute_blinded(A, B, &b_pair.public, BlindingOracle::H2).unwrap();
    let yba = ctx.recover_peer_public(A, B, &y, BlindingOracle::H2).unwrap();
    assert_eq!(yba.to_str_radix(16), b_pair.public.to_str_radix(16));

    let s1_b = ctx.compute_confirmation1(A, B, &xab, &b_pair.public).unwrap();
    let s1_a = ctx.compute_confirmation1(A, B, &a_pair.public, &yba).unwrap();
    assert_eq!(s1_a.to_hex(), s1_b.to_hex());

    let s2_a = ctx.compute_confirmation2(A, B, &a_pair.public, &yba).unwrap();
    let s2_b = ctx.compute_confirmation2(A, B, &xab, &b_pair.public).unwrap();
    assert_eq!(s2_a.to_hex(), s2_b.to_hex());

    let k_a = ctx.compute_session_key(A, B, &a_pair.public, &yba).unwrap();
    let k_b = ctx.compute_session_key(A, B, &xab, &b_pair.public).unwrap();
    assert_eq!(k_a.to_hex(), k_b.to_hex());

    assert_ne!(s1_a, s2_a);
    assert_ne!(s2_a, k_a);
}

#[test]
fn blinded_value_differs_from_public_value() {
    let ctx = context();
    let pair = ctx.generate_ephemeral().unwrap();
    let x = ctx.compute_blinded(A, B, &pair.public, BlindingOracle::H1).unwrap();
    assert_ne!(x, pair.public);
    assert!(x > *ctx.group().modulus());
}

#[test]
fn recover_rejects_zero() {
    let ctx = context();
    assert_eq!(
        ctx.recover_peer_public(A, B, &BigUint::zero(), BlindingOracle::H1),
        Err(PakError::InvalidExchangeValue)
    );
    assert_eq!(
        ctx.recover_peer_public(A, B, &BigUint::zero(), BlindingOracle::H2),
        Err(PakError::InvalidExchangeValue)
    );
}

#[test]
fn recover_rejects_values_that_divide_to_zero() {
    let ctx = context();
    for oracle in [BlindingOracle::H1, BlindingOracle::H2] {
        assert_eq!(
            ctx.recover_peer_public(A, B, &BigUint::from(1u8), oracle),
            Err(PakError::InvalidExchangeValue)
        );
    }

    let factor = blinding_factor(BlindingOracle::H1);
    let just_below = &factor - 1u8;
    assert_eq!(
        ctx.recover_peer_public(A, B, &just_below, BlindingOracle::H1),
        Err(PakError::InvalidExchangeValue)
    );
    assert_eq!(
        ctx.recover_peer_public(A, B, &factor, BlindingOracle::H1),
        Ok(BigUint::from(1u8))
    );
}

#[test]
fn recover_rejects_oversized_values() {
    let ctx = context();
    let oversized = BigUint::from(1u8) << 2176usize;
    assert_eq!(
        ctx.recover_peer_public(A, B, &oversized, BlindingOracle::H1),
        Err(PakError::InvalidExchangeValue)
    );
}

#[test]
fn wrong_password_recovers_a_different_value() {
    let alice = context();
    let eve = ClientContext::new(b"password124", GroupId::Modp1024).unwrap();

    let pair = alice.generate_ephemeral().unwrap();
    let x = alice.compute_blinded(A, B, &pair.public, BlindingOracle::H1).unwrap();
    let recovered = eve.recover_peer_public(A, B, &x, BlindingOracle::H1).unwrap();
    assert_ne!(recovered, pair.public);
}

#[test]
fn mismatched_oracle_recovers_a_different_value() {
    let ctx = context();
    let pair = ctx.generate_ephemeral().unwrap();
    let x = ctx.compute_blinded(A, B, &pair.public, BlindingOracle::H1).unwrap();
    let recovered = ctx.recover_peer_public(A, B, &x, BlindingOracle::H2).unwrap();
    assert_ne!(recovered, pair.public);
}

#[test]
fn empty_identities_are_rejected() {
    let ctx = context();
    let (g_ra, g_rb) = fixed_publics(&ctx);

    assert_eq!(
        ctx.compute_blinded(b"", B, &g_ra, BlindingOracle::H1),
        Err(PakError::InvalidInput)
    );
    assert_eq!(
        ctx.recover_peer_public(A, b"", &g_ra, BlindingOracle::H1),
        Err(PakError::InvalidInput)
    );
    assert_eq!(
        ctx.compute_confirmation1(b"", B, &g_ra, &g_rb).unwrap_err(),
        PakError::InvalidInput
    );
    assert_eq!(
        ctx.compute_confirmation2(A, b"", &g_ra, &g_rb).unwrap_err(),
        PakError::InvalidInput
    );
    assert_eq!(
        ctx.compute_session_key(b"", b"", &g_ra, &g_rb).unwrap_err(),
        PakError::InvalidInput
    );
}

#[test]
fn zero_public_values_are_rejected() {
    let ctx = context();
    let (g_ra, _) = fixed_publics(&ctx);
    let zero = BigUint::zero();

    assert_eq!(
        ctx.compute_blinded(A, B, &zero, BlindingOracle::H2),
        Err(PakError::InvalidInput)
    );
    assert_eq!(
        ctx.compute_confirmation1(A, B, &zero, &g_ra).unwrap_err(),
        PakError::InvalidInput
    );
    assert_eq!(
        ctx.compute_session_key(A, B, &g_ra, &zero).unwrap_err(),
        PakError::InvalidInput
    );
}

#[test]
fn computations_are_idempotent() {
    let ctx = context();
    let (g_ra, g_rb) = fixed_publics(&ctx);
    let first = ctx.compute_confirmation2(A, B, &g_ra, &g_rb).unwrap();
    let second = ctx.compute_confirmation2(A, B, &g_ra, &g_rb).unwrap();
    assert_eq!(first, second);
}

#[test]
fn context_is_shareable_across_threads() {
    let ctx = std::sync::Arc::new(context());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                let id = format!("party-{}", i);
                let pair = ctx.generate_ephemeral().unwrap();
                let x = ctx
                    .compute_blinded(id.as_bytes(), B, &pair.public, BlindingOracle::H1)
                    .unwrap();
                let recovered = ctx
                    .recover_peer_public(id.as_bytes(), B, &x, BlindingOracle::H1)
                    .unwrap();
                recovered == pair.public
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
