pub mod http_face_sdk;
