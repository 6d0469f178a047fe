use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Reset the store and walk through hotels, customers and reservations
    Demo,

    /// Manage hotels
    Hotel {
        #[command(subcommand)]
        action: HotelAction,
    },

    /// Manage customers
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Book a room for a customer
    Reserve(ReserveArgs),

    /// Cancel an active reservation and release its room
    Cancel {
        reservation_id: String,
    },

    /// List reservations, optionally for one hotel or customer
    Reservations {
        #[arg(long, conflicts_with = "customer")]
        hotel: Option<String>,

        #[arg(long)]
        customer: Option<String>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum HotelAction {
    Add(HotelArgs),
    List,
    Show { hotel_id: String },
    Update(HotelUpdateArgs),
    Delete { hotel_id: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CustomerAction {
    Add(CustomerArgs),
    List,
    Show { customer_id: String },
    Update(CustomerUpdateArgs),
    Delete { customer_id: String },
}

#[derive(Debug, Clone, Args)]
pub struct HotelArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub location: String,

    #[arg(long)]
    pub rooms: u32,

    #[arg(long, default_value = "0.0")]
    pub price: f64,
}

#[derive(Debug, Clone, Args)]
pub struct HotelUpdateArgs {
    pub hotel_id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub rooms: Option<u32>,

    #[arg(long)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Args)]
pub struct CustomerArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,
}

#[derive(Debug, Clone, Args)]
pub struct CustomerUpdateArgs {
    pub customer_id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ReserveArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub customer: String,

    #[arg(long)]
    pub hotel: String,

    /// YYYY-MM-DD
    #[arg(long)]
    pub check_in: String,

    /// YYYY-MM-DD
    #[arg(long)]
    pub check_out: String,
}
