//! Registro de vehículos
//!
//! Servicio CRUD por capas: rutas HTTP -> controller -> servicio de
//! aplicación -> puerto de repositorio -> adaptador de persistencia.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
