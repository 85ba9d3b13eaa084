use super::*;

#[test]
fn credentials_serialize_to_exactly_username_and_password() {
    let payload = Credentials {
        username: "a@b.com".to_owned(),
        password: "secret".to_owned(),
    };
    let value = serde_json::to_value(&payload).expect("serializable");
    let object = value.as_object().expect("object body");
    let mut keys: Vec<_> = object.keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["password", "username"]);
    assert_eq!(object["username"], "a@b.com");
    assert_eq!(object["password"], "secret");
}

#[test]
fn registration_serializes_without_any_confirmation_field() {
    let payload = Registration {
        username: "pat".to_owned(),
        email: "pat@example.com".to_owned(),
        password: "Password1!".to_owned(),
    };
    let value = serde_json::to_value(&payload).expect("serializable");
    let object = value.as_object().expect("object body");
    let mut keys: Vec<_> = object.keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["email", "password", "username"]);
}
