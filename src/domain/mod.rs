pub mod city;
pub mod shared;
