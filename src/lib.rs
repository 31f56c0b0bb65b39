pub mod config;

pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod deferred;
        pub mod validation;
    }
    pub mod infrastructure {
        pub mod connectivity;
        pub mod key_value_store;
    }
}

pub mod modules {
    pub mod clock_entries {
        pub mod core {
            pub mod entry;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod sync_offline_entries {
                pub mod handler;
                pub mod outcome;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod local_entry_store;
                pub mod simulated_remote;
            }
        }
    }
    pub mod session {
        pub mod core {
            pub mod access_code;
            pub mod decide;
            pub mod events;
            pub mod evolve;
            pub mod state;
        }
        pub mod use_cases {
            pub mod controller;
            pub mod register_admin;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
        }
    }
    pub mod branding {
        pub mod core {
            pub mod selector;
            pub mod theme;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
        }
    }
    pub mod roster {
        pub mod core {
            pub mod employee;
            pub mod seed;
            pub mod view;
        }
        pub mod use_cases {
            pub mod browse_employees {
                pub mod view_model;
            }
            pub mod validate_new_employee {
                pub mod form;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod employee_cache;
            }
        }
    }
}

pub mod shell;
