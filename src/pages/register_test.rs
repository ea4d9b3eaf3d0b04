use super::*;

fn reply(message: &str) -> AuthResponse {
    AuthResponse {
        token: "t".to_owned(),
        email: "new@uni.edu".to_owned(),
        name: "New".to_owned(),
        role: "STUDENT".to_owned(),
        message: message.to_owned(),
    }
}

#[test]
fn success_notice_prefers_server_message() {
    assert_eq!(success_notice(&reply("Registration successful")), "Registration successful");
    assert_eq!(success_notice(&reply("Welcome aboard")), "Welcome aboard");
}

#[test]
fn success_notice_falls_back_when_message_empty() {
    assert_eq!(success_notice(&reply("")), "Registration successful");
}

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(false), "Create Account");
    assert_eq!(submit_label(true), "Creating Account...");
}

#[test]
fn success_notice_falls_back_when_reply_omits_message() {
    let resp: AuthResponse = serde_json::from_str(r#"{"token":"t1","role":"FACULTY"}"#).unwrap();
    assert_eq!(success_notice(&resp), "Registration successful");
}
