use super::HTTPError;
use super::http_client::HTTPClient;
use super::http_request::flight_states_get::FlightStatesRequest;
use super::http_request::request_common::{NoBodyHTTPRequestType, RequestError};
use super::http_response::response_common::ResponseError;
use crate::flight_data::BoundingBox;
use crate::info;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

pub(crate) const STATES_BODY: &str = "{\"states\": []}";
pub(crate) const OK_RESPONSE: &str =
    "HTTP/1.1 200 OK\r\nContent-Length: 14\r\nConnection: close\r\n\r\n{\"states\": []}";
const UNAVAILABLE_RESPONSE: &str =
    "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
const NOT_FOUND_RESPONSE: &str =
    "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
const NOT_MODIFIED_RESPONSE: &str = "HTTP/1.1 304 Not Modified\r\nConnection: close\r\n\r\n";
const TRUNCATED_RESPONSE: &str =
    "HTTP/1.1 200 OK\r\nContent-Length: 64\r\nConnection: close\r\n\r\n{\"st";

pub(crate) fn spawn_states_stub(response: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/api", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (mut socket, _) = listener.accept().unwrap();
        let head = read_request_head(&mut socket);
        socket.write_all(response.as_bytes()).unwrap();
        head.lines().next().unwrap_or_default().to_string()
    });
    (base_url, handle)
}

fn read_request_head(socket: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut byte = [0u8; 1];
    while !head.ends_with(b"\r\n\r\n") && socket.read(&mut byte).unwrap() > 0 {
        head.push(byte[0]);
    }
    String::from_utf8(head).unwrap()
}

pub(crate) fn refused_base_url() -> String {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{port}/api")
}

fn fetch_states(base_url: &str) -> Result<String, HTTPError> {
    let client = HTTPClient::new(base_url).unwrap();
    FlightStatesRequest { bbox: BoundingBox::PARIS }.send_request(&client)
}

#[test]
fn test_state_body_round_trip() {
    info!("Running state body round trip test");
    let (base_url, stub) = spawn_states_stub(OK_RESPONSE);
    let body = fetch_states(&base_url).unwrap();
    assert_eq!(body, STATES_BODY);
    stub.join().unwrap();
}

#[test]
fn test_request_line_carries_bounding_box() {
    let (base_url, stub) = spawn_states_stub(OK_RESPONSE);
    fetch_states(&base_url).unwrap();
    let request_line = stub.join().unwrap();
    assert_eq!(
        request_line,
        "GET /api/states/all?lamin=48.724017&lomin=2.356484&lamax=48.775232&lomax=2.539622 HTTP/1.1"
    );
}

#[test]
fn test_server_error_is_surfaced() {
    let (base_url, stub) = spawn_states_stub(UNAVAILABLE_RESPONSE);
    let err = fetch_states(&base_url).unwrap_err();
    assert!(matches!(
        err,
        HTTPError::HTTPResponseError(ResponseError::InternalServer { code: 503 })
    ));
    stub.join().unwrap();
}

#[test]
fn test_client_error_is_surfaced() {
    let (base_url, stub) = spawn_states_stub(NOT_FOUND_RESPONSE);
    let err = fetch_states(&base_url).unwrap_err();
    assert!(matches!(
        err,
        HTTPError::HTTPResponseError(ResponseError::BadRequest { code: 404 })
    ));
    stub.join().unwrap();
}

#[test]
fn test_status_outside_known_classes_is_surfaced() {
    let (base_url, stub) = spawn_states_stub(NOT_MODIFIED_RESPONSE);
    let err = fetch_states(&base_url).unwrap_err();
    assert!(matches!(
        err,
        HTTPError::HTTPResponseError(ResponseError::UnexpectedStatus { code: 304 })
    ));
    stub.join().unwrap();
}

#[test]
fn test_unreachable_backend_is_no_connection() {
    let err = fetch_states(&refused_base_url()).unwrap_err();
    assert!(matches!(
        err,
        HTTPError::HTTPRequestError(RequestError::NoConnection)
    ));
}

#[test]
fn test_silent_backend_times_out() {
    info!("Running silent backend timeout test");
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/api", listener.local_addr().unwrap());
    let stub = thread::spawn(move || {
        let (socket, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_millis(800));
        drop(socket);
    });
    let client = HTTPClient::with_timeout(&base_url, Duration::from_millis(300)).unwrap();
    let err =
        FlightStatesRequest { bbox: BoundingBox::PARIS }.send_request(&client).unwrap_err();
    assert!(matches!(
        err,
        HTTPError::HTTPRequestError(RequestError::Timeout)
    ));
    stub.join().unwrap();
}

#[test]
fn test_truncated_body_is_unreadable() {
    let (base_url, stub) = spawn_states_stub(TRUNCATED_RESPONSE);
    let err = fetch_states(&base_url).unwrap_err();
    assert!(matches!(
        err,
        HTTPError::HTTPResponseError(ResponseError::UnreadableBody)
    ));
    stub.join().unwrap();
}
