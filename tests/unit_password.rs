use marquee_core::password::{hash_password_with_cost, verify_password, verify_password_async};

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let hash = hash_password_with_cost(password, 4).unwrap();

    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_same_password_hashes_differ() {
    let first = hash_password_with_cost("testpassword123", 4).unwrap();
    let second = hash_password_with_cost("testpassword123", 4).unwrap();

    assert_ne!(first, second);
    assert!(verify_password("testpassword123", &first).unwrap());
    assert!(verify_password("testpassword123", &second).unwrap());
}

#[test]
fn test_verify_is_case_sensitive() {
    let hash = hash_password_with_cost("Password123", 4).unwrap();

    assert!(!verify_password("password123", &hash).unwrap());
}

#[tokio::test]
async fn test_async_verify() {
    let hash = hash_password_with_cost("testpassword123", 4).unwrap();

    assert!(
        verify_password_async("testpassword123".to_string(), hash.clone())
            .await
            .unwrap()
    );
    assert!(
        !verify_password_async("wrongpassword".to_string(), hash)
            .await
            .unwrap()
    );
}
