use askama::Template;

#[derive(Template)]
#[template(path = "login_form.html")]
pub struct LoginFormTemplate<'a> {
    pub user_login: &'a str,
    pub redirect_to: &'a str,
    pub interim: bool,
    pub lost_password_url: &'a str,
}

#[derive(Template)]
#[template(path = "confirm_admin_email.html")]
pub struct ConfirmAdminEmailTemplate<'a> {
    pub admin_email: &'a str,
    pub login_url: &'a str,
}
