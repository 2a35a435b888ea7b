// src/bin/generate_password_hash.rs
//! 初期管理者などのパスワードハッシュを生成する補助ツール
use hr_backend::utils::password::{Argon2Config, PasswordManager, PasswordPolicy};
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

fn read_password() -> io::Result<String> {
    if let Some(password) = env::args().nth(1) {
        return Ok(password);
    }

    // インタラクティブにパスワードを入力
    print!("Enter password to hash: ");
    io::stdout().flush()?;

    let mut password = String::new();
    io::stdin().read_line(&mut password)?;
    Ok(password.trim().to_string())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let password = match read_password() {
        Ok(password) if !password.is_empty() => password,
        Ok(_) => {
            eprintln!("Error: Password cannot be empty");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error reading password: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let manager = match PasswordManager::new(Argon2Config::from_env(), PasswordPolicy::from_env())
    {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match manager.hash_password(&password) {
        Ok(hash) => {
            println!("\n=== Password Hash Generated ===");
            println!("Hash: {}", hash);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error generating password hash: {}", e);
            ExitCode::FAILURE
        }
    }
}
