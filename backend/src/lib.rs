pub mod conf;
pub mod db;
pub mod startup;
pub mod telemetry;

mod routes;
