/*
[INPUT]:  Module declarations for CLI flows
[OUTPUT]: Public module exports for interactive commands
[POS]:    CLI module registry
[UPDATE]: When adding new CLI subcommands
*/

pub mod login;
