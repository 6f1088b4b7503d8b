//! User profiles and relations.
endpoints! {
	/// Endpoints of the `/user` resource.
	USER_ENDPOINTS;

	/// Public profile of a user.
	Anonymous Get "/user/info" => user_info / USER_INFO [("id" | "name")] "UserInfo";

	/// Users supporting the given user.
	Anonymous Get "/user/supporters" => user_supporters / USER_SUPPORTERS [("id" | "name")] "UserSupporters";

	/// Users the given user supports.
	Anonymous Get "/user/supporting" => user_supporting / USER_SUPPORTING [("id" | "name")] "UserSupporting";

	Anonymous Get "/user/search" => user_search / USER_SEARCH ["keyword"] "UserSearch";
	Anonymous Get "/user/channels" => user_channels / USER_CHANNELS ["user_id"] "UserChannels";

	/// Recently registered users.
	Anonymous Get "/user/newest" => user_newest / USER_NEWEST [] "UserNewest";

	/// Whether `s_user_id` supports `t_user_id`.
	Anonymous Get "/user/is_support" => user_is_support / USER_IS_SUPPORT ["s_user_id", "t_user_id"] "UserIsSupport";

	Anonymous Get "/user/trophies" => user_trophies / USER_TROPHIES ["user_id"] "UserTrophies";
	Anonymous Get "/user/stream" => user_stream / USER_STREAM [("id" | "name")] "UserStream";

	/// Updates the profile of the authorizing user.
	///
	/// Accepts file parameters (e.g. an avatar), uploaded as multipart file
	/// fields.
	Authenticated Post "/user/update_profile" => user_update_profile / USER_UPDATE_PROFILE [] "UserUpdateProfile";

	Authenticated Post "/user/support" => user_support / USER_SUPPORT ["uidname"] "UserSupport";
	Authenticated Post "/user/unsupport" => user_unsupport / USER_UNSUPPORT ["uidname"] "UserUnsupport";
	Authenticated Post "/user/block" => user_block / USER_BLOCK ["uidname"] "UserBlock";
	Authenticated Post "/user/unblock" => user_unblock / USER_UNBLOCK ["uidname"] "UserUnblock";

	/// Reports a user to the moderators.
	Authenticated Post "/user/report" => user_report / USER_REPORT ["uidname", "message"] "UserReport";
}
