//! Diesel table definitions for the mugs database.
//!
//! Keep in sync with `migrations/`.

diesel::table! {
    users (id) {
        id -> Uuid,
        first_name -> Varchar,
        last_name -> Varchar,
        email -> Nullable<Varchar>,
        created_at -> Timestamptz,
        modified_at -> Timestamptz,
    }
}

diesel::table! {
    locations (id) {
        id -> Uuid,
        name -> Varchar,
        description -> Nullable<Text>,
        created_at -> Timestamptz,
        modified_at -> Timestamptz,
    }
}

diesel::table! {
    mugs (id) {
        id -> Uuid,
        display_name -> Varchar,
        user_id -> Uuid,
        location_id -> Uuid,
    }
}

diesel::joinable!(mugs -> users (user_id));
diesel::joinable!(mugs -> locations (location_id));

diesel::allow_tables_to_appear_in_same_query!(users, locations, mugs);
