//! Diesel schema for the shared logistics tables.
//!
//! The tables are owned by the office application; this crate only reads.

diesel::table! {
    /// Shipment orders.
    orders (id) {
        /// Primary key.
        id -> Integer,
        /// Human-readable order number.
        #[max_length = 50]
        order_number -> Nullable<Varchar>,
        /// Client name.
        #[max_length = 200]
        client_name -> Nullable<Varchar>,
        /// Container count typed into the order.
        container_count -> Nullable<Integer>,
        /// Goods description.
        #[max_length = 100]
        goods_type -> Nullable<Varchar>,
        /// Route description.
        #[max_length = 200]
        route -> Nullable<Varchar>,
        /// Lifecycle status text.
        #[max_length = 50]
        status -> Nullable<Varchar>,
        /// Registration timestamp.
        creation_date -> Nullable<Timestamp>,
        /// Departure from the origin port.
        departure_date -> Nullable<Timestamp>,
        /// Arrival in Iran.
        arrival_iran_date -> Nullable<Timestamp>,
        /// Estimated arrival.
        eta_date -> Nullable<Timestamp>,
        /// Arrival notice timestamp.
        arrival_notice_date -> Nullable<Timestamp>,
        /// Arrival in Turkmenistan.
        tkm_date -> Nullable<Timestamp>,
        /// Free-text notes.
        notes -> Nullable<Text>,
        /// Last synchronisation from the office application.
        last_sync -> Nullable<Timestamp>,
    }
}

diesel::table! {
    /// Containers and their trucking assignment.
    containers (id) {
        /// Primary key.
        id -> Integer,
        /// Parent order.
        order_id -> Nullable<Integer>,
        /// Container number.
        #[max_length = 50]
        container_number -> Nullable<Varchar>,
        /// Driver first name.
        #[max_length = 100]
        driver_first_name -> Nullable<Varchar>,
        /// Driver last name.
        #[max_length = 100]
        driver_last_name -> Nullable<Varchar>,
        /// Trucking company.
        #[max_length = 200]
        driver_company -> Nullable<Varchar>,
        /// Truck plate number.
        #[max_length = 50]
        truck_number -> Nullable<Varchar>,
        /// Driver phone in Iran.
        #[max_length = 50]
        driver_iran_phone -> Nullable<Varchar>,
        /// Driver phone in Turkmenistan.
        #[max_length = 50]
        driver_turkmenistan_phone -> Nullable<Varchar>,
        /// Date the client received the goods.
        client_receiving_date -> Nullable<Timestamp>,
    }
}

diesel::table! {
    /// Office follow-up tasks.
    tasks (id) {
        /// Primary key.
        id -> Integer,
        /// Parent order.
        order_id -> Nullable<Integer>,
        /// Task description.
        #[max_length = 500]
        description -> Nullable<Varchar>,
        /// Assignee.
        #[max_length = 100]
        assigned_to -> Nullable<Varchar>,
        /// Task status text.
        #[max_length = 20]
        status -> Nullable<Varchar>,
        /// Priority text.
        #[max_length = 20]
        priority -> Nullable<Varchar>,
        /// Deadline.
        due_date -> Nullable<Timestamp>,
    }
}

diesel::joinable!(containers -> orders (order_id));
diesel::joinable!(tasks -> orders (order_id));
diesel::allow_tables_to_appear_in_same_query!(orders, containers, tasks);
