//! Authentication service.
//!
//! Registration, password login and refresh-token exchange. Every successful login or
//! refresh signs a fresh access token carrying the user's role and employee record ID,
//! which is what the permission checks read on later requests.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        auth::{LoginDto, RefreshTokenDto, RegisterDto},
        user::CreateUserDto,
    },
    server::{
        cache::Cache,
        data::{employee::EmployeeRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{auth::AuthTokens, employee::Employee, user::User},
        service::user::UserService,
        util::{password::verify_password, token::TokenMaker},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn Cache,
    tokens: &'a TokenMaker,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `cache` - Cache backend, invalidated when registration adds a user
    /// - `tokens` - Signer for access and refresh tokens
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn Cache, tokens: &'a TokenMaker) -> Self {
        Self { db, cache, tokens }
    }

    /// Registers a new employee account.
    ///
    /// Self-registration always creates an employee; roles are only assigned by staff.
    ///
    /// # Arguments
    /// - `dto` - Email, password, full name and optional department name
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError)` - Validation, conflict or database error from account creation
    pub async fn register(&self, dto: RegisterDto) -> Result<User, AppError> {
        UserService::new(self.db, self.cache)
            .create(CreateUserDto {
                email: dto.email,
                password: dto.password,
                full_name: dto.full_name,
                role: None,
                department: dto.department,
                location: None,
                timezone: None,
            })
            .await
    }

    /// Logs in with email and password.
    ///
    /// Unknown emails and wrong passwords produce the same error so callers cannot
    /// probe which emails are registered.
    ///
    /// # Arguments
    /// - `dto` - Login credentials
    ///
    /// # Returns
    /// - `Ok(AuthTokens)` - Access and refresh tokens with the user
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AppError::NotFound)` - User has no employee record
    pub async fn login(&self, dto: LoginDto) -> Result<AuthTokens, AppError> {
        let credentials = UserRepository::new(self.db)
            .find_credentials_by_email(dto.email.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&dto.password, &credentials.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = credentials.user;
        let employee = self.employee_for(&user).await?;
        let refresh_token = self.tokens.create_refresh_token(&user.id, &user.email)?;

        tracing::debug!("User {} logged in", user.id);

        self.issue(user, &employee, refresh_token)
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// The user is reloaded so a role change or deletion since the refresh token was
    /// issued takes effect. The refresh token itself is returned unchanged.
    ///
    /// # Arguments
    /// - `dto` - Refresh token previously returned by login
    ///
    /// # Returns
    /// - `Ok(AuthTokens)` - New access token, the same refresh token and the user
    /// - `Err(AuthError::InvalidToken)` - Refresh token failed verification
    /// - `Err(AppError::NotFound)` - User or employee record no longer exists
    pub async fn refresh(&self, dto: RefreshTokenDto) -> Result<AuthTokens, AppError> {
        let payload = self.tokens.verify_refresh_token(&dto.refresh_token)?;

        let user = UserRepository::new(self.db)
            .find_by_id(&payload.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;
        let employee = self.employee_for(&user).await?;

        self.issue(user, &employee, dto.refresh_token)
    }

    async fn employee_for(&self, user: &User) -> Result<Employee, AppError> {
        EmployeeRepository::new(self.db)
            .find_by_user_id(&user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("employee not found".to_string()))
    }

    fn issue(
        &self,
        user: User,
        employee: &Employee,
        refresh_token: String,
    ) -> Result<AuthTokens, AppError> {
        let access_token =
            self.tokens
                .create_access_token(&user.id, &user.email, user.role, &employee.id)?;

        Ok(AuthTokens {
            access_token,
            refresh_token,
            expires_in: self.tokens.access_ttl_seconds(),
            user,
        })
    }
}
