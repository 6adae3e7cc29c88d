//! Diesel table definitions for the portfolio tables.
//!
//! The tables are provisioned outside this service; the adapters only read
//! and write them.

diesel::table! {
    visitors (id) {
        id -> Int4,
        name -> Text,
        relation -> Text,
        visit_time -> Timestamptz,
    }
}

diesel::table! {
    about (id) {
        id -> Int4,
        video_url -> Nullable<Text>,
        description -> Nullable<Text>,
        tools -> Nullable<Jsonb>,
        resume_url -> Nullable<Text>,
    }
}

diesel::table! {
    projects (id) {
        id -> Int4,
        title -> Text,
        description -> Nullable<Text>,
        image_url -> Nullable<Text>,
        live_link -> Nullable<Text>,
        source_code_link -> Nullable<Text>,
        tools -> Nullable<Jsonb>,
        category -> Nullable<Text>,
    }
}

diesel::table! {
    messages (id) {
        id -> Int4,
        name -> Text,
        email -> Text,
        message -> Text,
        #[sql_name = "timestamp"]
        sent_at -> Timestamptz,
    }
}
