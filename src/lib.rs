pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod revenue {
        pub mod core {
            pub mod event;
            pub mod query;
            pub mod read_cache;
            pub mod report;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod track_revenue {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod report_revenue {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
