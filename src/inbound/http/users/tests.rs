//! Handler-level coverage using a mocked repository port.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;

use super::*;
use crate::domain::ports::{MockUserRepository, UserPersistenceError};
use crate::domain::{User, UserId};

fn test_app(
    repository: MockUserRepository,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(Arc::new(repository))))
        .service(
            web::scope("/api/users")
                .service(get_user)
                .service(create_user)
                .service(update_user)
                .service(delete_user),
        )
}

async fn read_text(response: actix_web::dev::ServiceResponse) -> String {
    let body = actix_test::read_body(response).await;
    String::from_utf8(body.to_vec()).expect("utf8 body")
}

#[rstest]
#[case(7)]
#[case(0)]
#[case(-3)]
#[case(9_000_000_000)]
#[actix_web::test]
async fn get_saves_one_record_and_echoes_the_id(#[case] id: i64) {
    let mut repository = MockUserRepository::new();
    let expected_name = format!("Test{id}");
    repository
        .expect_save()
        .withf(move |record| record.name() == expected_name)
        .times(1)
        .returning(|record| Ok(User::new(UserId::new(1), record.into_name())));
    let app = actix_test::init_service(test_app(repository)).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/users/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_text(response).await, format!("User with ID: {id}"));
}

#[actix_web::test]
async fn post_formats_the_name_and_never_touches_the_repository() {
    let mut repository = MockUserRepository::new();
    repository.expect_save().never();
    let app = actix_test::init_service(test_app(repository)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/users")
        .insert_header((header::CONTENT_TYPE, "text/plain"))
        .set_payload("Grace")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_text(response).await, "Created user: Grace");
}

#[actix_web::test]
async fn put_formats_id_and_name_and_never_touches_the_repository() {
    let mut repository = MockUserRepository::new();
    repository.expect_save().never();
    let app = actix_test::init_service(test_app(repository)).await;

    let request = actix_test::TestRequest::put()
        .uri("/api/users/5")
        .insert_header((header::CONTENT_TYPE, "text/plain"))
        .set_payload("Grace")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_text(response).await, "Updated user ID 5 with name Grace");
}

#[actix_web::test]
async fn delete_formats_the_id_and_never_touches_the_repository() {
    let mut repository = MockUserRepository::new();
    repository.expect_save().never();
    let app = actix_test::init_service(test_app(repository)).await;

    let request = actix_test::TestRequest::delete()
        .uri("/api/users/9")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_text(response).await, "Deleted user with ID: 9");
}

#[actix_web::test]
async fn non_integer_id_is_rejected_before_the_repository() {
    let mut repository = MockUserRepository::new();
    repository.expect_save().never();
    let app = actix_test::init_service(test_app(repository)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/users/abc")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert!(response.status().is_client_error());
}

#[actix_web::test]
async fn concurrent_gets_each_save_independently() {
    let mut repository = MockUserRepository::new();
    repository
        .expect_save()
        .withf(|record| record.name() == "Test1")
        .times(2)
        .returning(|record| Ok(User::new(UserId::new(1), record.into_name())));
    let app = actix_test::init_service(test_app(repository)).await;

    let first = actix_test::TestRequest::get()
        .uri("/api/users/1")
        .to_request();
    let second = actix_test::TestRequest::get()
        .uri("/api/users/1")
        .to_request();
    let (first, second) = futures_util::join!(
        actix_test::call_service(&app, first),
        actix_test::call_service(&app, second),
    );

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
}

#[rstest]
#[case(
    UserPersistenceError::connection("refused"),
    StatusCode::SERVICE_UNAVAILABLE
)]
#[case(
    UserPersistenceError::query("write failed"),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[actix_web::test]
async fn repository_failures_surface_as_server_errors(
    #[case] failure: UserPersistenceError,
    #[case] expected_status: StatusCode,
) {
    let mut repository = MockUserRepository::new();
    repository
        .expect_save()
        .times(1)
        .returning(move |_| Err(failure.clone()));
    let app = actix_test::init_service(test_app(repository)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/users/1")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), expected_status);
}
